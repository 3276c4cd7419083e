//! Travel Search Form Component
//!
//! Collects trip dates, budget, destination and travel type, then submits
//! the query to the recommendation endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::HtmlInputElement;

use crate::api;
use crate::components::TravelTypeSelect;
use crate::context::use_app_context;
use crate::dates::DateOrderError;
use crate::notify::{blocking_alert, Submissions};
use crate::store::{SearchFormState, SearchFormStateStoreFields, SearchFormStore};

/// Clear the date input and tell the user why
fn reject_date(ev: &web_sys::Event, err: DateOrderError) {
    event_target::<HtmlInputElement>(ev).set_value("");
    web_sys::console::log_1(&format!("[SEARCH] Rejected date: {}", err).into());
    blocking_alert(&err.to_string());
}

/// Travel search form
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_app_context();
    let form: SearchFormStore = Store::new(SearchFormState::default());
    let submissions = RwSignal::new(Submissions::default());

    let on_start_date = move |ev: web_sys::Event| {
        let result = form.write().set_start_date(event_target_value(&ev));
        if let Err(err) = result {
            reject_date(&ev, err);
        }
    };

    let on_end_date = move |ev: web_sys::Event| {
        let result = form.write().set_end_date(event_target_value(&ev));
        if let Err(err) = result {
            reject_date(&ev, err);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = form.with_untracked(|state| state.to_query());
        let endpoint = ctx.api_endpoint();
        web_sys::console::log_1(&format!("[SEARCH] Submitting {:?} to {}", query, endpoint).into());
        let id = submissions.write().begin();

        // Not deduplicated: a second submit may overlap this one
        spawn_local(async move {
            let result = api::submit_search(&endpoint, &query).await;
            match &result {
                Ok(body) => web_sys::console::log_1(&format!("[SEARCH] Success: {}", body).into()),
                Err(e) => web_sys::console::error_1(&format!("[SEARCH] Error: {}", e).into()),
            }

            // Every reply is announced; only the newest one sets the status
            let outcome = submissions.write().finish(id, &result);
            if let Some(message) = outcome.alert_message() {
                blocking_alert(&message);
            }
        });
    };

    view! {
        <div class="search-card">
            <form
                class="search-form"
                data-status=move || submissions.with(|s| s.status().as_str())
                on:submit=on_submit
            >
                <div class="search-grid">
                    <label>
                        "出發日期"
                        <input
                            type="date"
                            required
                            prop:value=move || form.start_date().get()
                            on:change=on_start_date
                        />
                    </label>

                    <label>
                        "回程日期"
                        <input
                            type="date"
                            required
                            prop:value=move || form.end_date().get()
                            on:change=on_end_date
                        />
                    </label>

                    <label class="full">
                        "預算 (TWD)"
                        <input
                            type="number"
                            min="1"
                            placeholder="請輸入預算金額"
                            required
                            prop:value=move || form.budget().get()
                            on:input=move |ev| form.budget().set(event_target_value(&ev))
                        />
                    </label>

                    <label class="full">
                        "目的地"
                        <input
                            type="text"
                            placeholder="請輸入目的地"
                            required
                            prop:value=move || form.destination().get()
                            on:input=move |ev| form.destination().set(event_target_value(&ev))
                        />
                    </label>

                    <TravelTypeSelect
                        current=Signal::derive(move || form.travel_type().get())
                        on_change=move |t| form.travel_type().set(t)
                    />

                    <div class="full">
                        <button type="submit" class="search-submit">"搜尋"</button>
                    </div>
                </div>
            </form>
        </div>
    }
}
