//! Company roster and Access Gate
//!
//! The roster is static reference data; the gate tracks which companies the
//! current session has unlocked. The unlocked set only grows — there is no
//! re-lock short of restarting the process, and nothing is persisted.

use std::collections::HashSet;
use std::path::Path;

use shared::error::{AppError, AppResult};
use shared::models::Company;

/// Static company reference entities, keyed by id and by display name
#[derive(Debug, Clone)]
pub struct CompanyRoster {
    companies: Vec<Company>,
}

impl CompanyRoster {
    /// Built-in roster matching the original deployment
    pub fn builtin() -> Self {
        Self {
            companies: vec![
                Company {
                    id: "1".into(),
                    name: "Pachy Central".into(),
                    access_code: "7551".into(),
                    photo_url: "https://picsum.photos/seed/pachy/400".into(),
                },
                Company {
                    id: "2".into(),
                    name: "Adhoc S.A".into(),
                    access_code: "5678".into(),
                    photo_url: "https://picsum.photos/seed/adhoc/400".into(),
                },
            ],
        }
    }

    /// Load a roster from a JSON file (array of company objects)
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!("Failed to read roster {}: {e}", path.display()))
        })?;
        let companies: Vec<Company> = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(format!("Invalid roster {}: {e}", path.display()))
        })?;
        Ok(Self { companies })
    }

    pub fn by_id(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Set of company names the session has unlocked
///
/// The code check is an exact, case-sensitive string comparison with no
/// normalization, throttling, or lockout; this is a trusted internal tool
/// and the exact match is by design.
#[derive(Debug, Default)]
pub struct AccessGate {
    unlocked: HashSet<String>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to unlock a company with a submitted code.
    ///
    /// On success the company name joins the unlocked set; re-unlocking an
    /// already-unlocked company is a no-op that still reports success. On
    /// failure nothing changes and the caller gets a uniform rejection.
    pub fn attempt_unlock(&mut self, company: &Company, submitted_code: &str) -> bool {
        if submitted_code == company.access_code {
            self.unlocked.insert(company.name.clone());
            true
        } else {
            false
        }
    }

    pub fn is_unlocked(&self, company_name: &str) -> bool {
        self.unlocked.contains(company_name)
    }

    /// The unlocked set, for the visibility filter
    pub fn unlocked(&self) -> &HashSet<String> {
        &self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster() {
        let roster = CompanyRoster::builtin();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.by_id("1").unwrap().name, "Pachy Central");
        assert_eq!(roster.by_name("Adhoc S.A").unwrap().access_code, "5678");
        assert!(roster.by_name("pachy central").is_none());
    }

    #[test]
    fn test_unlock_with_correct_code() {
        let roster = CompanyRoster::builtin();
        let mut gate = AccessGate::new();
        let pachy = roster.by_name("Pachy Central").unwrap();

        assert!(gate.attempt_unlock(pachy, "7551"));
        assert!(gate.is_unlocked("Pachy Central"));
        assert!(!gate.is_unlocked("Adhoc S.A"));
    }

    #[test]
    fn test_unlock_with_wrong_code_changes_nothing() {
        let roster = CompanyRoster::builtin();
        let mut gate = AccessGate::new();
        let pachy = roster.by_name("Pachy Central").unwrap();

        assert!(!gate.attempt_unlock(pachy, "0000"));
        assert!(gate.unlocked().is_empty());

        // Case-sensitive, exact match only
        assert!(!gate.attempt_unlock(pachy, "7551 "));
        assert!(!gate.attempt_unlock(pachy, " 7551"));
        assert!(gate.unlocked().is_empty());
    }

    #[test]
    fn test_unlock_is_idempotent_and_monotonic() {
        let roster = CompanyRoster::builtin();
        let mut gate = AccessGate::new();
        let pachy = roster.by_name("Pachy Central").unwrap();

        assert!(gate.attempt_unlock(pachy, "7551"));
        // A later wrong code never re-locks
        assert!(!gate.attempt_unlock(pachy, "0000"));
        assert!(gate.is_unlocked("Pachy Central"));
        // Re-unlocking stays unlocked
        assert!(gate.attempt_unlock(pachy, "7551"));
        assert_eq!(gate.unlocked().len(), 1);
    }

    #[test]
    fn test_roster_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("companies.json");
        std::fs::write(
            &path,
            r#"[{"id":"9","name":"Norte SRL","accessCode":"0001","photoUrl":"https://example.com/norte.png"}]"#,
        )
        .unwrap();

        let roster = CompanyRoster::from_file(&path).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.by_id("9").unwrap().access_code, "0001");

        let missing = CompanyRoster::from_file(tmp.path().join("nope.json"));
        assert!(missing.is_err());
    }
}
