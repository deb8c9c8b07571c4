//! Role-specific dashboard read compositions.
//!
//! Each dashboard runs a handful of independent reads and shapes them in
//! memory. Nothing is cached; every request reads the latest committed rows.

use axum::extract::{Path, State};
use axum::Json;
use epms_core::dashboard::{
    compute_manager_kpis, summarize_goals, GoalSummary, ManagerKpis, HR_FEEDBACK_FEED_LIMIT,
};
use epms_core::error::CoreError;
use epms_core::roles::Role;
use epms_core::types::DbId;
use epms_core::validation::require_text;
use epms_db::models::employee::TeamMember;
use epms_db::models::feedback::Feedback;
use epms_db::models::goal::Goal;
use epms_db::models::hr::{FeedbackFeedItem, WorkforceKpis};
use epms_db::repositories::{EmployeeRepo, FeedbackRepo, GoalRepo, HrAnalyticsRepo};
use serde::Serialize;

use super::goals::resolve_emp_id;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireHr, RequireManager};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `GET /employee/{user_id}/dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboard {
    pub emp_id: DbId,
    /// Most recent feedback entry, if any.
    pub latest_score: Option<Feedback>,
    pub goals: Vec<Goal>,
    pub summary: GoalSummary,
}

/// Response for `GET /manager/dashboard/{manager_id}`.
#[derive(Debug, Serialize)]
pub struct ManagerDashboard {
    pub team: Vec<TeamMember>,
    pub goals: Vec<Goal>,
    pub feedbacks: Vec<Feedback>,
    pub kpis: ManagerKpis,
}

/// A chart series: one label and one value per department.
#[derive(Debug, Serialize, PartialEq)]
pub struct DeptSeries<T> {
    pub labels: Vec<String>,
    pub data: Vec<T>,
}

impl<T> FromIterator<(String, T)> for DeptSeries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let (labels, data) = iter.into_iter().unzip();
        DeptSeries { labels, data }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrAnalytics {
    pub headcount_by_dept: DeptSeries<i64>,
    /// Sourced from `department_revenue`; the figure is revenue, not attrition.
    pub turnover_by_dept: DeptSeries<f64>,
}

/// Response for `GET /hr/dashboard-data`.
#[derive(Debug, Serialize)]
pub struct HrDashboard {
    pub kpis: WorkforceKpis,
    pub analytics: HrAnalytics,
    pub feedback: Vec<FeedbackFeedItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/employee/{user_id}/dashboard
///
/// Fails with `EMPLOYEE_NOT_MAPPED` when the login has no employee record.
pub async fn employee_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<EmployeeDashboard>> {
    user.ensure_can_view(&user_id)?;

    let emp_id = resolve_emp_id(&state.pool, &user_id).await?;
    let latest_score = FeedbackRepo::latest_for_employee(&state.pool, emp_id).await?;
    let goals = GoalRepo::list_for_employee(&state.pool, emp_id).await?;
    let summary = summarize_goals(goals.iter().map(|g| g.status.as_str()));

    Ok(Json(EmployeeDashboard {
        emp_id,
        latest_score,
        goals,
        summary,
    }))
}

/// GET /api/v1/manager/dashboard/{manager_id}
///
/// A Manager may only load their own team; Admin may load any.
pub async fn manager_dashboard(
    State(state): State<AppState>,
    RequireManager(caller): RequireManager,
    Path(manager_id): Path<String>,
) -> AppResult<Json<ManagerDashboard>> {
    let manager_id = require_text("managerId", Some(manager_id.as_str()))?;
    if caller.role != Role::Admin && caller.user_id != manager_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Managers may only view their own team".into(),
        )));
    }

    // These reads are not one snapshot. A write landing between the team
    // read and the goal/feedback reads can show a member without their
    // newest goal, or a goal for someone no longer on the team.
    let team = EmployeeRepo::list_team(&state.pool, &manager_id).await?;
    let emp_ids: Vec<DbId> = team.iter().map(|m| m.emp_id).collect();
    let goals = GoalRepo::list_for_employees(&state.pool, &emp_ids).await?;
    let feedbacks = FeedbackRepo::list_for_employees(&state.pool, &emp_ids).await?;

    let percents: Vec<f64> = goals.iter().map(|g| g.completion_percent).collect();
    let kpis = compute_manager_kpis(team.len(), &percents);

    tracing::debug!(
        %manager_id,
        team_size = kpis.team_size,
        goals = kpis.goals_assigned,
        "Manager dashboard built"
    );

    Ok(Json(ManagerDashboard {
        team,
        goals,
        feedbacks,
        kpis,
    }))
}

/// GET /api/v1/hr/dashboard-data
///
/// Organisation-wide KPIs, per-department series ordered by department
/// name, and the most recent feedback entries.
pub async fn hr_dashboard(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
) -> AppResult<Json<HrDashboard>> {
    let kpis = HrAnalyticsRepo::workforce_kpis(&state.pool).await?;
    let headcount = HrAnalyticsRepo::headcount_by_department(&state.pool).await?;
    let revenue = HrAnalyticsRepo::revenue_by_department(&state.pool).await?;
    let feedback = HrAnalyticsRepo::recent_feedback(&state.pool, HR_FEEDBACK_FEED_LIMIT).await?;

    Ok(Json(HrDashboard {
        kpis,
        analytics: HrAnalytics {
            headcount_by_dept: headcount
                .into_iter()
                .map(|d| (d.dept_name, d.headcount))
                .collect(),
            turnover_by_dept: revenue
                .into_iter()
                .map(|d| (d.dept_name, d.value))
                .collect(),
        },
        feedback,
    }))
}
