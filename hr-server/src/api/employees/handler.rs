//! Employee API Handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate};

use crate::state::AppState;

/// Outcome of a lifecycle mutation. A missing id is not an error — the
/// mutation is a silent no-op and only `updated` reports it.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResult {
    pub updated: bool,
}

/// Incident report kinds from the admin UI action flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportAction {
    Accident,
    Leave,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub action: ReportAction,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportAck {
    pub acknowledged: bool,
}

/// List the visible employees: exactly those whose company is unlocked,
/// recomputed from the directory and the gate on every request.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let gate = state.gate.read().await;
    let directory = state.directory.read().await;
    Ok(Json(directory.visible_to(gate.unlocked())))
}

/// Edit-flow snapshot of one employee
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let directory = state.directory.read().await;
    let employee = directory
        .get(&id)
        .ok_or_else(|| AppError::employee_not_found(&id))?;
    Ok(Json(employee))
}

/// Create a new employee.
///
/// Validation rejects the payload before any mutation, and the company must
/// be on the roster — an off-roster name would silently fall outside every
/// gate filter.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    payload.validate()?;
    if state.roster.by_name(&payload.company).is_none() {
        return Err(AppError::validation(format!(
            "Company {} is not on the roster",
            payload.company
        ))
        .with_detail("field", "company"));
    }

    let mut directory = state.directory.write().await;
    let employee = directory.add(payload);
    tracing::info!(id = %employee.id, company = %employee.company, "Employee created");
    Ok(Json(employee))
}

/// Replace an employee record wholesale (commit of the edit flow)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> AppResult<Json<UpdateResult>> {
    if employee.id != id {
        return Err(AppError::with_message(
            ErrorCode::EmployeeIdMismatch,
            format!("Body id {} does not match path id {id}", employee.id),
        ));
    }

    let mut directory = state.directory.write().await;
    let updated = directory.update(employee);
    Ok(Json(UpdateResult { updated }))
}

/// Cancel the contract: inactive + end date stamped with today
pub async fn cancel_contract(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let mut directory = state.directory.write().await;
    let updated = directory.cancel_contract(&id);
    if updated {
        tracing::info!(id = %id, "Contract cancelled");
    }
    Ok(Json(UpdateResult { updated }))
}

/// Add one disciplinary mark
pub async fn sanction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let mut directory = state.directory.write().await;
    let updated = directory.sanction(&id);
    if updated {
        tracing::info!(id = %id, "Employee sanctioned");
    }
    Ok(Json(UpdateResult { updated }))
}

/// Reactivate a cancelled contract and clear the end date
pub async fn rehire(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let mut directory = state.directory.write().await;
    let updated = directory.rehire(&id);
    if updated {
        tracing::info!(id = %id, "Employee rehired");
    }
    Ok(Json(UpdateResult { updated }))
}

/// File an incident report (accident/leave). Logged and acknowledged; the
/// record itself is not mutated.
pub async fn report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReportRequest>,
) -> AppResult<Json<ReportAck>> {
    let directory = state.directory.read().await;
    let employee = directory
        .get(&id)
        .ok_or_else(|| AppError::employee_not_found(&id))?;

    tracing::info!(
        id = %employee.id,
        name = %employee.name,
        action = ?payload.action,
        details = %payload.details,
        "Incident report filed"
    );
    Ok(Json(ReportAck { acknowledged: true }))
}
