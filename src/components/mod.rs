//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod search_form;
mod travel_type_select;

pub use nav_bar::NavBar;
pub use search_form::SearchForm;
pub use travel_type_select::TravelTypeSelect;
