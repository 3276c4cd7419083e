//! Backend API Bindings
//!
//! Outbound HTTP calls to the recommendation service, organized by domain.

mod error;
mod search;

pub use error::*;
pub use search::*;
