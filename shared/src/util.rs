//! Shared utility functions

use chrono::NaiveDate;

/// Current calendar date in local time (start/end dates are day-granular)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fresh opaque employee id
pub fn new_employee_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Default avatar for newly created employees
pub fn default_avatar(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/400")
}
