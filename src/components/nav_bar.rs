//! Navigation Bar Component
//!
//! Top bar with the site name and links to the routed pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{use_current_page, Page, SITE_TITLE};

/// Navigation bar; must be rendered inside `<Router>`
#[component]
pub fn NavBar() -> impl IntoView {
    let current_page = use_current_page();

    // Keep the document title in step with the route
    Effect::new(move |_| {
        let page = current_page.get();
        web_sys::console::log_1(&format!("[ROUTER] Showing {:?}", page).into());
        document().set_title(&page.title());
    });

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">{SITE_TITLE}</span>
            {Page::NAV.iter().map(|page| {
                let page = *page;
                let link_class = move || {
                    if current_page.get() == page { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <A href=page.path() attr:class=link_class>
                        {page.nav_label()}
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}
