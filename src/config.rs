//! Runtime Configuration
//!
//! Endpoint settings, optionally overridden by a global object that the host
//! page defines before the wasm bundle loads:
//!
//! ```html
//! <script>window.__TRAVEL_PLANNER_CONFIG__ = { apiEndpoint: "https://example.test/api/moreopenai" };</script>
//! ```

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Default recommendation endpoint
pub const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:8080/api/moreopenai";

/// Name of the optional global override object
const CONFIG_GLOBAL: &str = "__TRAVEL_PLANNER_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Where search queries are POSTed
    pub api_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the page override, falling back to defaults
    pub fn load() -> Self {
        let global = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if global.is_undefined() || global.is_null() {
            return Self::default();
        }

        match serde_wasm_bindgen::from_value::<AppConfig>(global) {
            Ok(config) => {
                let config = config.normalized();
                web_sys::console::log_1(&format!("[CONFIG] Using endpoint {}", config.api_endpoint).into());
                config
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    /// Blank endpoints fall back to the default
    fn normalized(mut self) -> Self {
        let trimmed = self.api_endpoint.trim();
        self.api_endpoint = if trimmed.is_empty() {
            DEFAULT_API_ENDPOINT.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}
