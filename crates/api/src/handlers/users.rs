//! Handlers for the `/users` resource.
//!
//! All handlers require the `Admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use epms_core::error::CoreError;
use epms_core::roles::Role;
use epms_db::models::user::{CreateUser, UpdateUser, UserResponse};
use epms_db::repositories::user_repo::UQ_USER_ID;
use epms_db::repositories::UserRepo;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "userId is required"))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "firstName is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}

/// Request body for `PUT /users/{user_id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "firstName is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    /// Replaces the stored password only when present and non-empty.
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// POST /api/v1/users
///
/// Validate, hash the password and insert. A taken user id is a 409.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(mut input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    trim_fields(&mut [
        &mut input.user_id,
        &mut input.first_name,
        &mut input.last_name,
    ]);
    input.email = input
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    input.validate().map_err(validation_error)?;
    let role: Role = input.role.trim().parse()?;
    validate_password_strength(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let dto = CreateUser {
        user_id: input.user_id,
        password_hash,
        role: role.as_str().to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
    };

    let user = match UserRepo::create(&state.pool, &dto).await {
        Ok(user) => user,
        Err(e) if epms_db::is_unique_violation(&e, UQ_USER_ID) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "User ID already exists: {}",
                dto.user_id
            ))));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.user_id, role = %user.role, created_by = %admin.user_id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// PUT /api/v1/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<String>,
    Json(mut input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    trim_fields(&mut [&mut input.first_name, &mut input.last_name]);
    input.validate().map_err(validation_error)?;
    let role: Role = input.role.trim().parse()?;

    let password_hash = match input.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => {
            validate_password_strength(password)?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };

    let dto = UpdateUser {
        first_name: input.first_name,
        last_name: input.last_name,
        role: role.as_str().to_string(),
        password_hash,
    };

    let user = UserRepo::update(&state.pool, &user_id, &dto)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &user_id))?;

    tracing::info!(user_id = %user.user_id, updated_by = %admin.user_id, "User updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// DELETE /api/v1/users/{user_id}
///
/// Hard delete. The user's employee record, goals and feedback remain.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<String>,
) -> AppResult<StatusCode> {
    if !UserRepo::delete(&state.pool, &user_id).await? {
        return Err(CoreError::not_found("User", &user_id).into());
    }
    tracing::info!(%user_id, deleted_by = %admin.user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trim_fields(fields: &mut [&mut String]) {
    for field in fields.iter_mut() {
        **field = field.trim().to_string();
    }
}

/// Flatten `validator` errors into one message, first failure per field.
fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    AppError::Core(CoreError::Validation(messages.join("; ")))
}
