//! Home Page

use leptos::prelude::*;

use crate::components::SearchForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <h4 class="page-heading home-heading">"開始規劃你的旅程"</h4>
            <SearchForm />
        </div>
    }
}
