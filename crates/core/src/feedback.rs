//! Feedback scoring rules.

use crate::dashboard::round2;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{require_id, require_text};

/// Lowest score a manager may record.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score a manager may record.
pub const MAX_SCORE: f64 = 10.0;

/// A validated feedback entry, ready to append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub emp_id: DbId,
    pub manager_id: String,
    /// Already rounded to two decimals.
    pub score: f64,
    pub comments: String,
}

impl NewFeedback {
    pub fn new(
        emp_id: Option<DbId>,
        manager_id: Option<&str>,
        score: Option<f64>,
        comments: Option<&str>,
    ) -> Result<Self, CoreError> {
        let emp_id = require_id("empId", emp_id)?;
        let manager_id = require_text("managerId", manager_id)?;
        let score = validate_score(score)?;

        Ok(NewFeedback {
            emp_id,
            manager_id,
            score,
            comments: comments.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Check that a score is present, finite and in range, then round it to
/// the two decimals the `NUMERIC(4,2)` column holds.
pub fn validate_score(score: Option<f64>) -> Result<f64, CoreError> {
    let Some(score) = score else {
        return Err(CoreError::Validation("score is required".to_string()));
    };
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}"
        )));
    }
    Ok(round2(score))
}
