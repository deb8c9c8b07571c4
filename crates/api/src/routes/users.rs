//! Route definitions for the `/users` resource (Admin only).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /              -> list_users
/// POST   /              -> create_user
/// PUT    /{user_id}     -> update_user
/// DELETE /{user_id}     -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{user_id}",
            put(users::update_user).delete(users::delete_user),
        )
}
