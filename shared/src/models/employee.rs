//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

/// Contract classification. Carries no scheduling or payroll logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    FullTime,
    PartTime,
    Temporary,
    Eventual,
}

/// Declared sex category (optional on the record)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// One attendance entry: date plus clock-in/clock-out times ("HH:MM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub date: NaiveDate,
    pub clock_in: String,
    pub clock_out: String,
}

/// Employee record — one per hired individual
///
/// `end_date` is set iff the contract was cancelled; rehiring clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    pub name: String,
    pub position: String,
    pub avatar_url: String,
    pub status: EmployeeStatus,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub salary: f64,
    /// Disciplinary marks. Never negative through store operations;
    /// a decrement is only reachable via a full-record update.
    pub sanctions: u32,
    pub attendance: Vec<Attendance>,
    /// Grouping key, matched by name against the company roster
    pub company: String,
    pub contract_type: ContractType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub company: String,
    pub contract_type: ContractType,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub personal_info: Option<String>,
}

impl EmployeeCreate {
    /// Reject the payload before any mutation happens.
    ///
    /// Name, position and company must be non-blank; salary must be a
    /// non-negative finite number.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required_field("name"));
        }
        if self.position.trim().is_empty() {
            return Err(AppError::required_field("position"));
        }
        if self.company.trim().is_empty() {
            return Err(AppError::required_field("company"));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(
                AppError::validation("Salary must be a non-negative number")
                    .with_detail("field", "salary"),
            );
        }
        Ok(())
    }
}
