use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <p>"關於我"</p> }
}
