//! Route definitions for the `/manager` resource (Manager or Admin).

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{dashboard, feedback, goals};
use crate::state::AppState;

/// Routes mounted at `/manager`.
///
/// ```text
/// GET    /dashboard/{manager_id}       -> manager_dashboard
/// POST   /goal                         -> create_goal
/// DELETE /goal/{goal_id}               -> delete_goal
/// PUT    /goal/{goal_id}/progress      -> manager_update_progress
/// POST   /feedback                     -> add_feedback
/// GET    /feedback/{emp_id}            -> list_feedback_for_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/{manager_id}", get(dashboard::manager_dashboard))
        .route("/goal", post(goals::create_goal))
        .route("/goal/{goal_id}", delete(goals::delete_goal))
        .route(
            "/goal/{goal_id}/progress",
            put(goals::manager_update_progress),
        )
        .route("/feedback", post(feedback::add_feedback))
        .route(
            "/feedback/{emp_id}",
            get(feedback::list_feedback_for_employee),
        )
}
