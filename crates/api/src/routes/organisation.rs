//! Route definitions for departments and employee records (Admin only).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::organisation;
use crate::state::AppState;

/// Routes mounted at `/departments`.
///
/// ```text
/// GET  /                      -> list_departments
/// POST /                      -> create_department
/// PUT  /{dept_id}/revenue     -> set_department_revenue
/// ```
pub fn departments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(organisation::list_departments).post(organisation::create_department),
        )
        .route(
            "/{dept_id}/revenue",
            put(organisation::set_department_revenue),
        )
}

/// Routes mounted at `/employees`.
///
/// ```text
/// GET  /   -> list_employees
/// POST /   -> create_employee
/// ```
pub fn employees_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(organisation::list_employees).post(organisation::create_employee),
    )
}
