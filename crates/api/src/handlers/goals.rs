//! Handlers for goal lifecycle operations.
//!
//! Managers create, progress and delete goals under `/manager/goal`;
//! employees read their own goals and report progress under `/employee`.
//! Every progress write goes through [`CompletionPercent`] so the stored
//! status always matches the percentage.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use epms_core::error::CoreError;
use epms_core::goals::{CompletionPercent, NewGoal};
use epms_core::types::DbId;
use epms_db::models::goal::Goal;
use epms_db::repositories::{EmployeeRepo, GoalRepo};
use epms_db::DbPool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::optional_number;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /manager/goal`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub emp_id: Option<DbId>,
    pub title: Option<String>,
    pub assigned_by: Option<String>,
    pub description: Option<String>,
}

/// Request body for the progress endpoints.
///
/// Kept as a raw JSON value so a non-numeric percentage is reported as a
/// validation error rather than an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[serde(default)]
    pub completion_percent: Option<Value>,
}

/// Response for `GET /employee/{user_id}/goals`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeGoalsResponse {
    pub emp_id: DbId,
    pub goals: Vec<Goal>,
}

// ---------------------------------------------------------------------------
// Manager handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/manager/goal
///
/// Create a goal at 0% / "In Progress".
pub async fn create_goal(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Json(input): Json<CreateGoalRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Goal>>)> {
    let new_goal = NewGoal::new(
        input.emp_id,
        input.title.as_deref(),
        input.assigned_by.as_deref(),
        input.description.as_deref(),
    )?;

    let goal = match GoalRepo::create(&state.pool, &new_goal).await {
        Ok(goal) => goal,
        Err(e) if epms_db::is_foreign_key_violation(&e) => {
            return Err(CoreError::not_found("Employee", new_goal.emp_id).into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        goal_id = goal.id,
        emp_id = goal.emp_id,
        assigned_by = %goal.assigned_by,
        "Goal created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// PUT /api/v1/manager/goal/{goal_id}/progress
pub async fn manager_update_progress(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(goal_id): Path<DbId>,
    Json(input): Json<UpdateProgressRequest>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let percent = parse_completion_percent(input.completion_percent.as_ref())?;
    let goal = write_progress(&state.pool, goal_id, percent).await?;
    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/manager/goal/{goal_id}
pub async fn delete_goal(
    State(state): State<AppState>,
    RequireManager(manager): RequireManager,
    Path(goal_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GoalRepo::delete(&state.pool, goal_id).await? {
        return Err(CoreError::not_found("Goal", goal_id).into());
    }
    tracing::info!(goal_id, deleted_by = %manager.user_id, "Goal deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Employee handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/employee/{user_id}/goals
///
/// All goals for the employee mapped to `user_id`, oldest first.
pub async fn list_employee_goals(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<EmployeeGoalsResponse>> {
    user.ensure_can_view(&user_id)?;
    let emp_id = resolve_emp_id(&state.pool, &user_id).await?;
    let goals = GoalRepo::list_for_employee(&state.pool, emp_id).await?;
    Ok(Json(EmployeeGoalsResponse { emp_id, goals }))
}

/// PUT /api/v1/employee/goals/{goal_id}
///
/// Any caller may progress the goals on their own EmpID. Managers and Admins
/// may progress any goal; HR may not.
pub async fn employee_update_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(goal_id): Path<DbId>,
    Json(input): Json<UpdateProgressRequest>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let percent = parse_completion_percent(input.completion_percent.as_ref())?;

    if !user.role.can_progress_any_goal() {
        let goal = GoalRepo::find_by_id(&state.pool, goal_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Goal", goal_id))?;
        let own_emp_id = EmployeeRepo::find_emp_id_by_user_id(&state.pool, &user.user_id).await?;
        if own_emp_id != Some(goal.emp_id) {
            return Err(AppError::Core(CoreError::Forbidden(
                "You may only update your own goals".into(),
            )));
        }
    }

    let goal = write_progress(&state.pool, goal_id, percent).await?;
    Ok(Json(DataResponse { data: goal }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a login identifier to its EmpID, or fail with the distinguished
/// unmapped-account error.
pub(crate) async fn resolve_emp_id(pool: &DbPool, user_id: &str) -> AppResult<DbId> {
    EmployeeRepo::find_emp_id_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::UnmappedAccount {
                user_id: user_id.to_string(),
            })
        })
}

/// Accept a JSON number or a numeric string, then range-check it.
fn parse_completion_percent(raw: Option<&Value>) -> Result<CompletionPercent, CoreError> {
    CompletionPercent::from_input(optional_number("completionPercent", raw)?)
}

async fn write_progress(
    pool: &DbPool,
    goal_id: DbId,
    percent: CompletionPercent,
) -> AppResult<Goal> {
    let goal = GoalRepo::update_progress(pool, goal_id, percent)
        .await?
        .ok_or_else(|| CoreError::not_found("Goal", goal_id))?;

    tracing::info!(
        goal_id,
        completion_percent = percent.value(),
        status = %percent.status(),
        "Goal progress updated"
    );
    Ok(goal)
}
