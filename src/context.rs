//! Application Context
//!
//! Shared, read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Runtime configuration loaded at start-up
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Endpoint for search submissions
    pub fn api_endpoint(&self) -> String {
        self.config.with_value(|c| c.api_endpoint.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
