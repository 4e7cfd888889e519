//! Company API Handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::{Company, CompanyOverview};

use crate::access::AccessGate;
use crate::directory::EmployeeDirectory;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub code: String,
}

fn overview(
    company: &Company,
    gate: &AccessGate,
    directory: &EmployeeDirectory,
) -> CompanyOverview {
    CompanyOverview {
        id: company.id.clone(),
        name: company.name.clone(),
        photo_url: company.photo_url.clone(),
        unlocked: gate.is_unlocked(&company.name),
        employee_count: directory.count_for_company(&company.name),
    }
}

/// List the roster with unlocked flags and employee counts.
/// Access codes never appear in the response.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CompanyOverview>>> {
    let gate = state.gate.read().await;
    let directory = state.directory.read().await;

    let companies = state
        .roster
        .iter()
        .map(|c| overview(c, &gate, &directory))
        .collect();
    Ok(Json(companies))
}

/// Select one company as pending verification (the unlock prompt).
/// Pure read — the unlocked set is not touched.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CompanyOverview>> {
    let company = state
        .roster
        .by_id(&id)
        .ok_or_else(|| AppError::company_not_found(&id))?;

    let gate = state.gate.read().await;
    let directory = state.directory.read().await;
    Ok(Json(overview(company, &gate, &directory)))
}

/// Attempt to unlock a company with a submitted access code.
///
/// An empty code is rejected locally before any comparison. A wrong code is
/// a uniform, immediately retryable rejection with no state change.
pub async fn unlock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UnlockRequest>,
) -> AppResult<Json<CompanyOverview>> {
    if payload.code.is_empty() {
        return Err(AppError::required_field("code"));
    }

    let company = state
        .roster
        .by_id(&id)
        .ok_or_else(|| AppError::company_not_found(&id))?;

    let mut gate = state.gate.write().await;
    if !gate.attempt_unlock(company, &payload.code) {
        tracing::info!(company = %company.name, "Unlock attempt rejected");
        return Err(AppError::access_denied());
    }
    tracing::info!(company = %company.name, "Company unlocked");

    let directory = state.directory.read().await;
    Ok(Json(overview(company, &gate, &directory)))
}
