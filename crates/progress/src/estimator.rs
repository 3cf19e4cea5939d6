//! Completion time estimation.

use chrono::Duration;
use nrp_core::Time;

use crate::tracker::CourseProgressTracker;

/// Remaining study time for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEstimate {
    /// Minutes of content not yet completed
    pub remaining_minutes: u32,

    /// Study days left at the estimator's daily pace
    pub study_days: u32,

    /// Finish time if studying without breaks from `from`
    pub estimated_finish: Time,
}

/// Completion time estimator.
pub struct CompletionEstimator {
    daily_minutes: u32,
}

impl CompletionEstimator {
    /// Estimator with a custom daily study pace (minimum one minute).
    pub fn with_daily_minutes(daily_minutes: u32) -> Self {
        Self {
            daily_minutes: daily_minutes.max(1),
        }
    }

    /// Estimate the remaining time of a session.
    pub fn estimate(&self, tracker: &CourseProgressTracker, from: Time) -> TimeEstimate {
        let remaining = tracker.progress_summary().remaining_duration_minutes;
        TimeEstimate {
            remaining_minutes: remaining,
            study_days: remaining.div_ceil(self.daily_minutes),
            estimated_finish: from + Duration::minutes(i64::from(remaining)),
        }
    }
}

impl Default for CompletionEstimator {
    // Eight-hour training days
    fn default() -> Self {
        Self::with_daily_minutes(8 * 60)
    }
}
