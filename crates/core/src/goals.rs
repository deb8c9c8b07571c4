//! Goal lifecycle rules.
//!
//! A goal's status is never chosen by a caller. It is derived from the
//! completion percentage through [`CompletionPercent::status`], and the only
//! way to build a [`CompletionPercent`] is through [`CompletionPercent::new`],
//! which rejects anything outside `0..=100`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{require_id, require_text};

/// Upper bound of a goal's progress.
pub const FULL_COMPLETION: f64 = 100.0;

/// Stored status label for goals below 100%.
pub const STATUS_IN_PROGRESS: &str = "In Progress";
/// Stored status label for goals at exactly 100%.
pub const STATUS_COMPLETE: &str = "Complete";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Derived goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Complete")]
    Complete,
}

impl GoalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::InProgress => STATUS_IN_PROGRESS,
            GoalStatus::Complete => STATUS_COMPLETE,
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a stored status label reads as complete (case-insensitive).
///
/// Dashboards classify rows by their stored label rather than re-deriving it,
/// so legacy rows written as `"complete"` or `"COMPLETE"` still count.
pub fn is_complete_label(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case(STATUS_COMPLETE)
}

// ---------------------------------------------------------------------------
// Completion percent
// ---------------------------------------------------------------------------

/// A validated completion percentage in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CompletionPercent(f64);

impl CompletionPercent {
    /// Progress of a freshly created goal.
    pub const ZERO: CompletionPercent = CompletionPercent(0.0);

    /// Validate a raw percentage. NaN, infinities, negatives and values above
    /// 100 are all rejected.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(0.0..=FULL_COMPLETION).contains(&value) {
            return Err(CoreError::Validation(
                "completionPercent must be between 0 and 100".to_string(),
            ));
        }
        Ok(CompletionPercent(value))
    }

    /// Validate an optional percentage, treating absence as a missing field.
    pub fn from_input(value: Option<f64>) -> Result<Self, CoreError> {
        match value {
            Some(v) => Self::new(v),
            None => Err(CoreError::Validation(
                "completionPercent is required".to_string(),
            )),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `Complete` iff the percentage is exactly 100.
    pub fn status(self) -> GoalStatus {
        if self.0 == FULL_COMPLETION {
            GoalStatus::Complete
        } else {
            GoalStatus::InProgress
        }
    }
}

// ---------------------------------------------------------------------------
// New goals
// ---------------------------------------------------------------------------

/// A validated goal-creation request. Progress always starts at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub emp_id: DbId,
    pub title: String,
    pub assigned_by: String,
    pub description: Option<String>,
}

impl NewGoal {
    pub fn new(
        emp_id: Option<DbId>,
        title: Option<&str>,
        assigned_by: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, CoreError> {
        let emp_id = require_id("empId", emp_id)?;
        let title = require_text("title", title)?;
        let assigned_by = require_text("assignedBy", assigned_by)?;
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewGoal {
            emp_id,
            title,
            assigned_by,
            description,
        })
    }

    pub fn initial_progress(&self) -> CompletionPercent {
        CompletionPercent::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_complete_only_at_one_hundred() {
        for p in 0..=100 {
            let pct = CompletionPercent::new(f64::from(p)).unwrap();
            let expected = if p == 100 {
                GoalStatus::Complete
            } else {
                GoalStatus::InProgress
            };
            assert_eq!(pct.status(), expected, "percent {p}");
        }
    }

    #[test]
    fn fractional_values_below_one_hundred_stay_in_progress() {
        let pct = CompletionPercent::new(99.99).unwrap();
        assert_eq!(pct.status(), GoalStatus::InProgress);
    }

    #[test]
    fn out_of_range_and_non_finite_values_are_rejected() {
        for bad in [-0.01, -1.0, 100.01, 250.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = CompletionPercent::new(bad).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "value {bad}");
        }
    }

    #[test]
    fn missing_percent_is_a_validation_error() {
        let err = CompletionPercent::from_input(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: completionPercent is required"
        );
    }

    #[test]
    fn status_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&GoalStatus::Complete).unwrap(),
            "\"Complete\""
        );
    }

    #[test]
    fn complete_label_match_ignores_case() {
        assert!(is_complete_label("Complete"));
        assert!(is_complete_label("complete"));
        assert!(is_complete_label(" COMPLETE "));
        assert!(!is_complete_label("Completed"));
        assert!(!is_complete_label("In Progress"));
        assert!(!is_complete_label(""));
    }

    #[test]
    fn new_goal_requires_emp_title_and_assigner() {
        let goal = NewGoal::new(Some(42), Some(" Improve X "), Some("MGR1"), Some("  ")).unwrap();
        assert_eq!(goal.emp_id, 42);
        assert_eq!(goal.title, "Improve X");
        assert_eq!(goal.assigned_by, "MGR1");
        assert_eq!(goal.description, None);
        assert_eq!(goal.initial_progress().status(), GoalStatus::InProgress);

        assert!(NewGoal::new(None, Some("t"), Some("m"), None).is_err());
        assert!(NewGoal::new(Some(1), Some(""), Some("m"), None).is_err());
        assert!(NewGoal::new(Some(1), Some("t"), None, None).is_err());
    }
}
