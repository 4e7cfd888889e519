//! hr-server — single-tenant HR administration backend
//!
//! Holds one in-memory employee directory grouped by company, gates each
//! company's records behind a per-company access code, and forwards pasted
//! text to the Gemini REST API for summarization and speech synthesis.
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── config.rs      # Environment configuration
//! ├── state.rs       # Composition root (AppState)
//! ├── directory/     # Employee Directory store
//! ├── access/        # Company roster + Access Gate
//! ├── assistant/     # Gemini summarize / speech client
//! └── api/           # HTTP routes and handlers
//! ```

pub mod access;
pub mod api;
pub mod assistant;
pub mod config;
pub mod directory;
pub mod state;

// Re-export public types
pub use access::{AccessGate, CompanyRoster};
pub use assistant::AssistantClient;
pub use config::Config;
pub use directory::EmployeeDirectory;
pub use state::AppState;
