//! Data models
//!
//! Shared between hr-server and whatever front end consumes the API.
//! Wire fields are camelCase to match the existing admin UI payloads.

pub mod company;
pub mod employee;

// Re-exports
pub use company::*;
pub use employee::*;
