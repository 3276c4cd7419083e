//! Travel Planner App
//!
//! Application shell: global stylesheet, navigation bar and routed pages.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AboutPage, HomePage, NotFound, PortfolioPage, SuccessPage};
use crate::routes::{use_current_page, Page};
use crate::theme::THEME;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(AppConfig::load()));

    view! {
        <style>{THEME.to_css()}</style>
        <Router>
            <div class="app-shell">
                <NavBar />
                <main class="page-container">
                    <RoutedPage />
                </main>
            </div>
        </Router>
    }
}

/// Renders the page resolved from the current location
#[component]
fn RoutedPage() -> impl IntoView {
    let current_page = use_current_page();

    move || match current_page.get() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Portfolio => view! { <PortfolioPage /> }.into_any(),
        Page::Success => view! { <SuccessPage /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}
