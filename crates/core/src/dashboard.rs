//! Dashboard arithmetic.
//!
//! The handlers fetch rows; the functions here turn them into the summary
//! and KPI blocks each role's dashboard shows.

use serde::Serialize;

use crate::goals::{is_complete_label, FULL_COMPLETION};

/// Number of feedback rows on the HR dashboard's recent-activity feed.
pub const HR_FEEDBACK_FEED_LIMIT: i64 = 20;

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean rounded to two decimals; `0.0` for an empty input.
pub fn mean_rounded<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

// ---------------------------------------------------------------------------
// Employee dashboard
// ---------------------------------------------------------------------------

/// Goal counts for the employee dashboard. `total == active + complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalSummary {
    pub total: usize,
    pub active: usize,
    pub complete: usize,
}

/// Classify goals by their stored status label.
pub fn summarize_goals<'a, I>(statuses: I) -> GoalSummary
where
    I: IntoIterator<Item = &'a str>,
{
    let mut summary = GoalSummary {
        total: 0,
        active: 0,
        complete: 0,
    };
    for status in statuses {
        summary.total += 1;
        if is_complete_label(status) {
            summary.complete += 1;
        } else {
            summary.active += 1;
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Manager dashboard
// ---------------------------------------------------------------------------

/// Team KPIs for the manager dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerKpis {
    pub team_size: usize,
    pub avg_goal_completion: f64,
    pub goals_assigned: usize,
    pub goals_complete: usize,
}

/// Compute team KPIs from the team size and each goal's completion percent.
///
/// A goal counts as complete when its percentage is exactly 100, regardless
/// of its stored label.
pub fn compute_manager_kpis(team_size: usize, completion_percents: &[f64]) -> ManagerKpis {
    let goals_complete = completion_percents
        .iter()
        .filter(|&&p| p == FULL_COMPLETION)
        .count();

    ManagerKpis {
        team_size,
        avg_goal_completion: mean_rounded(completion_percents.iter().copied()),
        goals_assigned: completion_percents.len(),
        goals_complete,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
