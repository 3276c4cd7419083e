//! Search Commands
//!
//! Submits a travel search to the recommendation endpoint.

use gloo_net::http::{Method, RequestBuilder};
use web_sys::RequestMode;

use super::{ensure_success, ApiError, ApiResult};
use crate::models::SearchQuery;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Fully prepared search request, ready to hand to the browser
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub method: Method,
    pub url: String,
    pub content_type: &'static str,
    pub mode: RequestMode,
    /// Serialized `SearchQuery`
    pub body: String,
}

impl SearchRequest {
    /// JSON POST of `query` to `endpoint`, CORS mode
    pub fn new(endpoint: &str, query: &SearchQuery) -> ApiResult<Self> {
        let body = serde_json::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: Method::POST,
            url: endpoint.to_string(),
            content_type: JSON_CONTENT_TYPE,
            mode: RequestMode::Cors,
            body,
        })
    }
}

/// POST the query as JSON and return the parsed response body.
///
/// One attempt only: no retry, timeout or cancellation.
pub async fn submit_search(endpoint: &str, query: &SearchQuery) -> ApiResult<serde_json::Value> {
    let prepared = SearchRequest::new(endpoint, query)?;
    let request = RequestBuilder::new(&prepared.url)
        .method(prepared.method)
        .mode(prepared.mode)
        .header("Content-Type", prepared.content_type)
        .body(prepared.body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = request.send().await?;
    ensure_success(response.status())?;

    let body = response.json::<serde_json::Value>().await?;
    Ok(body)
}
