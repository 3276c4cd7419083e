use leptos::prelude::*;

/// Test page; routed at `/success` but not linked anywhere
#[component]
pub fn SuccessPage() -> impl IntoView {
    view! { <h4 class="page-heading">"200 成功測試頁面"</h4> }
}
