//! Company Model

use serde::{Deserialize, Serialize};

/// Company reference entity
///
/// Static roster data: employees belong to a company by name match, not by
/// foreign key. The access code is a shared secret and is never serialized
/// into API responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub access_code: String,
    pub photo_url: String,
}

/// Company entry as exposed to the UI (no access code)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverview {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub unlocked: bool,
    pub employee_count: usize,
}
