pub mod auth;
pub mod employee;
pub mod health;
pub mod hr;
pub mod manager;
pub mod organisation;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               login (public)
///
/// /users                                    list, create (admin only)
/// /users/{user_id}                          update, delete (admin only)
///
/// /departments                              list, create (admin only)
/// /departments/{dept_id}/revenue            set revenue (admin only)
/// /employees                                list, create (admin only)
///
/// /employee/{user_id}/dashboard             employee dashboard (self or privileged)
/// /employee/{user_id}/goals                 employee goals (self or privileged)
/// /employee/goals/{goal_id}                 update own goal progress
///
/// /manager/dashboard/{manager_id}           manager dashboard
/// /manager/goal                             create goal
/// /manager/goal/{goal_id}                   delete goal
/// /manager/goal/{goal_id}/progress          update goal progress
/// /manager/feedback                         add feedback
/// /manager/feedback/{emp_id}                list feedback for an employee
///
/// /hr/dashboard-data                        HR dashboard
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/departments", organisation::departments_router())
        .nest("/employees", organisation::employees_router())
        .nest("/employee", employee::router())
        .nest("/manager", manager::router())
        .nest("/hr", hr::router())
}
