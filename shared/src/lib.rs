//! Shared types for the HR administration backend
//!
//! Domain models, error types, response structures, and utility
//! functions used by hr-server and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
