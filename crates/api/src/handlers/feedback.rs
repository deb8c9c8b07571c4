//! Handlers for the append-only feedback log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use epms_core::error::CoreError;
use epms_core::feedback::NewFeedback;
use epms_core::types::DbId;
use epms_db::models::feedback::Feedback;
use epms_db::repositories::FeedbackRepo;
use serde::Deserialize;
use serde_json::Value;

use super::optional_number;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /manager/feedback`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFeedbackRequest {
    pub emp_id: Option<DbId>,
    pub manager_id: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
    pub comments: Option<String>,
}

/// POST /api/v1/manager/feedback
///
/// Append a feedback entry. The score is stored rounded to two decimals.
pub async fn add_feedback(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Json(input): Json<AddFeedbackRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Feedback>>)> {
    let new_feedback = NewFeedback::new(
        input.emp_id,
        input.manager_id.as_deref(),
        optional_number("score", input.score.as_ref())?,
        input.comments.as_deref(),
    )?;

    let feedback = match FeedbackRepo::create(&state.pool, &new_feedback).await {
        Ok(feedback) => feedback,
        Err(e) if epms_db::is_foreign_key_violation(&e) => {
            return Err(CoreError::not_found("Employee", new_feedback.emp_id).into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        feedback_id = feedback.id,
        emp_id = feedback.emp_id,
        manager_id = %feedback.manager_id,
        score = feedback.score,
        "Feedback recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// GET /api/v1/manager/feedback/{emp_id}
///
/// All feedback for one employee, newest first. An EmpID with no entries
/// yields an empty list; a non-positive one is a 400.
pub async fn list_feedback_for_employee(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(emp_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Feedback>>>> {
    if emp_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "empId must be a positive integer, got {emp_id}"
        )));
    }
    let feedback = FeedbackRepo::list_for_employee(&state.pool, emp_id).await?;
    Ok(Json(DataResponse { data: feedback }))
}
