//! Handlers for departments, revenue figures and employee records.
//!
//! These feed the dashboards. All require the `Admin` role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use epms_core::error::CoreError;
use epms_core::types::DbId;
use epms_core::validation::{require_id, require_text};
use epms_db::models::department::Department;
use epms_db::models::employee::{CreateEmployeeDetails, EmployeeDetails};
use epms_db::repositories::department_repo::UQ_DEPARTMENT_NAME;
use epms_db::repositories::employee_repo::UQ_EMPLOYEE_USER_ID;
use epms_db::repositories::{DepartmentRepo, EmployeeRepo};
use serde::Deserialize;
use serde_json::Value;

use super::optional_number;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetRevenueRequest {
    #[serde(default)]
    pub revenue: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub user_id: Option<String>,
    pub dept_id: Option<DbId>,
    pub manager_id: Option<String>,
    pub job_title: Option<String>,
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

/// GET /api/v1/departments
pub async fn list_departments(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// POST /api/v1/departments
pub async fn create_department(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDepartmentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Department>>)> {
    let name = require_text("name", input.name.as_deref())?;

    let department = match DepartmentRepo::create(&state.pool, &name).await {
        Ok(d) => d,
        Err(e) if epms_db::is_unique_violation(&e, UQ_DEPARTMENT_NAME) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Department already exists: {name}"
            ))));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(dept_id = department.id, name = %department.name, "Department created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: department })))
}

/// PUT /api/v1/departments/{dept_id}/revenue
pub async fn set_department_revenue(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(dept_id): Path<DbId>,
    Json(input): Json<SetRevenueRequest>,
) -> AppResult<StatusCode> {
    let revenue = optional_number("revenue", input.revenue.as_ref())?
        .ok_or_else(|| CoreError::Validation("revenue is required".into()))?;
    if !revenue.is_finite() || revenue < 0.0 {
        return Err(CoreError::Validation(
            "revenue must be a non-negative number".into(),
        )
        .into());
    }

    match DepartmentRepo::set_revenue(&state.pool, dept_id, revenue).await {
        Ok(()) => {}
        Err(e) if epms_db::is_foreign_key_violation(&e) => {
            return Err(CoreError::not_found("Department", dept_id).into());
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(dept_id, revenue, "Department revenue set");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Employee records
// ---------------------------------------------------------------------------

/// GET /api/v1/employees
pub async fn list_employees(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<EmployeeDetails>>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// POST /api/v1/employees
///
/// Map a login to an EmpID, optionally with a department and manager.
pub async fn create_employee(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<EmployeeDetails>>)> {
    let user_id = require_text("userId", input.user_id.as_deref())?;
    let dept_id = match input.dept_id {
        Some(id) => Some(require_id("deptId", Some(id))?),
        None => None,
    };
    let non_blank = |v: Option<String>| {
        v.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let dto = CreateEmployeeDetails {
        user_id,
        dept_id,
        manager_id: non_blank(input.manager_id),
        job_title: non_blank(input.job_title),
    };

    let employee = match EmployeeRepo::create(&state.pool, &dto).await {
        Ok(e) => e,
        Err(e) if epms_db::is_unique_violation(&e, UQ_EMPLOYEE_USER_ID) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Employee record already exists for userId: {}",
                dto.user_id
            ))));
        }
        Err(e) if epms_db::is_foreign_key_violation(&e) => {
            return Err(CoreError::not_found("Department", dto.dept_id.unwrap_or_default()).into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        emp_id = employee.id,
        user_id = %employee.user_id,
        manager_id = ?employee.manager_id,
        "Employee record created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}
