//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the requirement. Admin passes every check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use epms_core::error::CoreError;
use epms_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require_roles(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[Role],
    message: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if user.role != Role::Admin && !allowed.contains(&user.role) {
        return Err(AppError::Core(CoreError::Forbidden(message.into())));
    }
    Ok(user)
}

/// Requires the `Admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_roles(parts, state, &[], "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

/// Requires `Manager` or `Admin`.
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_roles(parts, state, &[Role::Manager], "Manager or Admin role required")
            .await
            .map(RequireManager)
    }
}

/// Requires `HR` or `Admin`.
pub struct RequireHr(pub AuthUser);

impl FromRequestParts<AppState> for RequireHr {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_roles(parts, state, &[Role::Hr], "HR or Admin role required")
            .await
            .map(RequireHr)
    }
}
