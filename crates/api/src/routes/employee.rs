//! Route definitions for the employee-facing `/employee` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{dashboard, goals};
use crate::state::AppState;

/// Routes mounted at `/employee`.
///
/// ```text
/// GET /{user_id}/dashboard   -> employee_dashboard
/// GET /{user_id}/goals       -> list_employee_goals
/// PUT /goals/{goal_id}       -> employee_update_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/dashboard", get(dashboard::employee_dashboard))
        .route("/{user_id}/goals", get(goals::list_employee_goals))
        .route("/goals/{goal_id}", put(goals::employee_update_progress))
}
