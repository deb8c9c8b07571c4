//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use epms_core::error::CoreError;
use epms_core::roles::Role;
use epms_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Single message for unknown users and wrong passwords alike.
const INVALID_CREDENTIALS: &str = "Invalid User ID or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
///
/// The login form labels the identifier field `email`, so that name is
/// accepted as an alias for `userId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default, alias = "email")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with user id + password and return an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(user_id), Some(password)) = (
        input.user_id.as_deref().map(str::trim).filter(|s| !s.is_empty()),
        input.password.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "User ID and password are required".into(),
        )));
    };

    let unauthorized = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(unauthorized)?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = %user.user_id, "Rejected login with wrong password");
        return Err(unauthorized());
    }

    let role: Role = user.role.parse()?;
    let access_token = generate_access_token(&user.user_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.user_id, %role, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: user.user_id,
            role,
            first_name: user.first_name,
            last_name: user.last_name,
        },
    }))
}
