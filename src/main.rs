//! Travel Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dates;
mod models;
mod notify;
mod pages;
mod routes;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
