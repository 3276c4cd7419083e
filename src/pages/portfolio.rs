//! Portfolio Page
//!
//! Lists the fixed showcase projects.

use leptos::prelude::*;

use crate::models::{showcase_projects, Project};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (projects, set_projects) = signal(Vec::<Project>::new());

    // Populate once after mount
    Effect::new(move |_| {
        let loaded = showcase_projects();
        web_sys::console::log_1(&format!("[PORTFOLIO] Loaded {} projects", loaded.len()).into());
        set_projects.set(loaded);
    });

    view! {
        <div>
            <h4 class="page-heading">"我的作品集"</h4>
            <ul class="project-list">
                <For
                    each=move || projects.get()
                    key=|project| project.id
                    children=move |project| view! { <li>{project.name}</li> }
                />
            </ul>
        </div>
    }
}
