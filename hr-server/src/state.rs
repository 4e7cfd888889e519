//! Application state
//!
//! The composition root owns all mutable session state explicitly — the
//! employee directory and the unlocked-company set live here behind locks,
//! not as ambient globals, and are handed to the API layer by reference.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::access::{AccessGate, CompanyRoster};
use crate::assistant::AssistantClient;
use crate::config::Config;
use crate::directory::EmployeeDirectory;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Cloning is shallow (Arc-backed). Each store or gate operation runs to
/// completion under its lock, so operations never interleave — the single
/// logical writer the domain assumes.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (immutable)
    pub config: Config,
    /// Static company roster
    pub roster: Arc<CompanyRoster>,
    /// Employee Directory store
    pub directory: Arc<RwLock<EmployeeDirectory>>,
    /// Access Gate (unlocked-company set)
    pub gate: Arc<RwLock<AccessGate>>,
    /// Gemini assistant client
    pub assistant: AssistantClient,
}

impl AppState {
    /// Build the state from configuration: load the roster, seed the
    /// directory when configured, and wire the assistant client.
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let roster = match &config.companies_path {
            Some(path) => {
                let roster = CompanyRoster::from_file(path)?;
                tracing::info!(path, companies = roster.len(), "Loaded company roster");
                roster
            }
            None => CompanyRoster::builtin(),
        };

        let directory = if config.seed_employees {
            EmployeeDirectory::with_seed_data()
        } else {
            EmployeeDirectory::empty()
        };
        tracing::info!(
            employees = directory.len(),
            companies = roster.len(),
            assistant_configured = config.gemini_api_key.is_some(),
            "Application state initialized"
        );

        Ok(Self {
            config: config.clone(),
            roster: Arc::new(roster),
            directory: Arc::new(RwLock::new(directory)),
            gate: Arc::new(RwLock::new(AccessGate::new())),
            assistant: AssistantClient::from_config(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_with_seed() {
        let config = Config {
            seed_employees: true,
            ..Config::default()
        };
        let state = AppState::new(&config).unwrap();
        assert_eq!(state.directory.blocking_read().len(), 6);
        assert_eq!(state.roster.len(), 2);
        assert!(!state.assistant.is_configured());
    }

    #[test]
    fn test_state_empty_by_default_config() {
        let state = AppState::new(&Config::default()).unwrap();
        assert!(state.directory.blocking_read().is_empty());
        assert!(state.gate.blocking_read().unlocked().is_empty());
    }
}
