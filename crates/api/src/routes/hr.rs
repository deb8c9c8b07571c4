//! Route definitions for the `/hr` resource (HR or Admin).

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/hr`.
///
/// ```text
/// GET /dashboard-data   -> hr_dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard-data", get(dashboard::hr_dashboard))
}
