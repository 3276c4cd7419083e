//! Travel Type Select Component
//!
//! Required dropdown for the trip's travel type.

use leptos::prelude::*;

use crate::models::TravelType;

/// Travel type dropdown, empty until the user picks one
#[component]
pub fn TravelTypeSelect(
    current: Signal<Option<TravelType>>,
    on_change: impl Fn(Option<TravelType>) + Copy + 'static,
) -> impl IntoView {
    view! {
        <label class="full">
            "旅遊類型"
            <select
                required
                prop:value=move || current.get().map(|t| t.as_str()).unwrap_or_default()
                on:change=move |ev| on_change(TravelType::from_str(&event_target_value(&ev)))
            >
                <option value="" disabled>"請選擇旅遊類型"</option>
                {TravelType::ALL.iter().map(|t| view! {
                    <option value=t.as_str()>{t.label()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
