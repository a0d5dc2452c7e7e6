//! REST Endpoint Wrappers
//!
//! One async function per endpoint, organized by resource. Each performs
//! exactly one HTTP call through [`ApiClient`](crate::api::ApiClient) and
//! returns the parsed body unchanged.

mod auth;
mod projects;
mod tasks;
mod stats;

// Re-export all public items
pub use auth::*;
pub use projects::*;
pub use tasks::*;
pub use stats::*;
