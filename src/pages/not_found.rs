use leptos::prelude::*;

/// Fallback for unmatched paths
#[component]
pub fn NotFound() -> impl IntoView {
    view! { <h4 class="page-heading">"404 - 找不到頁面"</h4> }
}
