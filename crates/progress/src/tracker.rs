//! Course progress tracker - the session state machine.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use nrp_core::{
    format_minutes, minutes_to_hours, CertificateId, CompletionRecord, Course, Module, ModuleId,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::policy::{TrackerConfig, UnlockPolicy};

/// Result alias for tracker operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors returned by tracker operations. State is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Index or id outside the course
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Certificate requested before every module is complete
    #[error("course incomplete: {completed} of {total} modules completed")]
    CourseIncomplete {
        /// Completed modules
        completed: usize,
        /// Modules in the course
        total: usize,
    },
}

/// Per-module state within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleStatus {
    /// Cannot be selected
    Locked,
    /// Selectable, not yet completed
    Unlocked,
    /// Completed (terminal)
    Completed,
}

/// Mutable session state layered over a course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    completed: BTreeSet<ModuleId>,
    selected_index: usize,
}

impl ProgressState {
    /// Completed module ids in ascending order.
    pub fn completed(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.completed.iter().copied()
    }

    /// Currently selected zero-based index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }
}

/// Aggregate progress, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Completed modules
    pub completed_count: usize,

    /// Modules in the course
    pub total_count: usize,

    /// Percentage complete (0-100)
    pub percent_complete: f64,

    /// Sum of all module durations
    pub total_duration_minutes: u32,

    /// Sum of durations of modules not yet completed
    pub remaining_duration_minutes: u32,
}

impl ProgressSummary {
    /// Whether every module is completed.
    pub fn is_complete(&self) -> bool {
        self.completed_count == self.total_count
    }

    /// Total duration as `"6h 15min"`.
    pub fn total_duration_label(&self) -> String {
        format_minutes(self.total_duration_minutes)
    }
}

/// Result of a `complete_module` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The id was not completed before this call
    pub newly_completed: bool,

    /// This call completed the course
    pub course_completed: bool,

    /// Selection after the call
    pub selected_index: usize,
}

/// One display row of the module list.
#[derive(Debug, Clone, Copy)]
pub struct ModuleView<'a> {
    /// Module definition
    pub module: &'a Module,

    /// Session status
    pub status: ModuleStatus,

    /// Currently selected
    pub selected: bool,
}

/// Tracks one learner's progress through one course for one session.
#[derive(Debug, Clone)]
pub struct CourseProgressTracker {
    course: Arc<Course>,
    config: TrackerConfig,
    state: ProgressState,
}

impl CourseProgressTracker {
    /// Start an empty session over a course.
    pub fn new(course: impl Into<Arc<Course>>) -> Self {
        Self {
            course: course.into(),
            config: TrackerConfig::default(),
            state: ProgressState::default(),
        }
    }

    /// Set the tracker configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// The course being tracked.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Active configuration.
    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Current session state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Currently selected zero-based index.
    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// Currently selected module.
    pub fn selected_module(&self) -> &Module {
        &self.course.modules()[self.state.selected_index]
    }

    /// Whether a module id is completed.
    pub fn is_completed(&self, id: ModuleId) -> bool {
        self.state.completed.contains(&id)
    }

    /// Whether the module at `index` can be selected. Out of range is locked.
    pub fn is_unlocked(&self, index: usize) -> bool {
        let Some(module) = self.course.module_at(index) else {
            return false;
        };
        if !module.initially_locked {
            return true;
        }
        match self.config.unlock_policy {
            UnlockPolicy::Static => false,
            UnlockPolicy::Sequential => {
                self.is_completed(module.id)
                    || (index > 0 && self.is_completed(ModuleId::from_index(index - 1)))
            }
        }
    }

    /// Status of the module at `index`, or `None` when out of range.
    pub fn module_status(&self, index: usize) -> Option<ModuleStatus> {
        let module = self.course.module_at(index)?;
        Some(if self.is_completed(module.id) {
            ModuleStatus::Completed
        } else if self.is_unlocked(index) {
            ModuleStatus::Unlocked
        } else {
            ModuleStatus::Locked
        })
    }

    /// Display rows for every module.
    pub fn module_views(&self) -> Vec<ModuleView<'_>> {
        self.course
            .modules()
            .iter()
            .enumerate()
            .map(|(index, module)| ModuleView {
                module,
                status: self
                    .module_status(index)
                    .unwrap_or(ModuleStatus::Locked),
                selected: index == self.state.selected_index,
            })
            .collect()
    }

    /// Select the module at `index`.
    ///
    /// Returns `Ok(false)` and leaves the selection alone when the module is
    /// locked.
    pub fn select_module(&mut self, index: usize) -> Result<bool> {
        if index >= self.course.len() {
            warn!(index, len = self.course.len(), "select rejected: index out of range");
            return Err(ProgressError::InvalidArgument(format!(
                "module index {} out of range 0..{}",
                index,
                self.course.len()
            )));
        }

        if !self.is_unlocked(index) {
            debug!(index, "select ignored: module locked");
            return Ok(false);
        }

        self.state.selected_index = index;
        debug!(index, "module selected");
        Ok(true)
    }

    /// Mark a module completed and advance to the next one.
    ///
    /// Completion is idempotent and irreversible. When `id` is not the last
    /// module the selection moves to the module after it.
    pub fn complete_module(&mut self, id: ModuleId) -> Result<CompletionOutcome> {
        if !self.course.contains(id) {
            warn!(%id, len = self.course.len(), "complete rejected: id out of range");
            return Err(ProgressError::InvalidArgument(format!(
                "module id {} out of range 1..={}",
                id,
                self.course.len()
            )));
        }

        let was_complete = self.is_course_complete();
        let newly_completed = self.state.completed.insert(id);

        if id < self.course.last_id() {
            self.state.selected_index = id.get() as usize;
        }

        let course_completed = !was_complete && self.is_course_complete();
        debug!(%id, newly_completed, selected = self.state.selected_index, "module completed");
        if course_completed {
            info!(course = %self.course.code, "all modules completed");
        }

        Ok(CompletionOutcome {
            newly_completed,
            course_completed,
            selected_index: self.state.selected_index,
        })
    }

    /// Complete the currently selected module.
    pub fn complete_selected(&mut self) -> Result<CompletionOutcome> {
        self.complete_module(self.selected_module().id)
    }

    /// Aggregate progress.
    pub fn progress_summary(&self) -> ProgressSummary {
        let total_count = self.course.len();
        let completed_count = self.state.completed.len();
        let total_duration_minutes = self.course.total_duration_minutes();
        let remaining_duration_minutes = self
            .course
            .modules()
            .iter()
            .filter(|m| !self.is_completed(m.id))
            .map(|m| m.duration_minutes)
            .sum();

        ProgressSummary {
            completed_count,
            total_count,
            percent_complete: 100.0 * completed_count as f64 / total_count as f64,
            total_duration_minutes,
            remaining_duration_minutes,
        }
    }

    /// Whether every module is completed.
    pub fn is_course_complete(&self) -> bool {
        self.state.completed.len() == self.course.len()
    }

    /// Build a completion record for the certificate renderer.
    ///
    /// Fails with [`ProgressError::CourseIncomplete`] until every module is
    /// completed. Each call issues a fresh certificate id.
    pub fn issue_certificate(
        &self,
        contractor_name: &str,
        completion_date: NaiveDate,
    ) -> Result<CompletionRecord> {
        if !self.is_course_complete() {
            return Err(ProgressError::CourseIncomplete {
                completed: self.state.completed.len(),
                total: self.course.len(),
            });
        }
        if contractor_name.trim().is_empty() {
            return Err(ProgressError::InvalidArgument(
                "contractor name is empty".to_string(),
            ));
        }

        let record = CompletionRecord {
            course_name: self.course.name.clone(),
            contractor_name: contractor_name.trim().to_string(),
            completion_date,
            certificate_id: CertificateId::new(self.course.code.clone()),
            course_hours: minutes_to_hours(self.course.total_duration_minutes()),
            instructor_name: self.course.instructor.clone(),
        };
        info!(certificate = %record.certificate_id, "certificate issued");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// N modules, the first `open` unlocked, each 30 minutes.
    fn test_course(n: u32, open: u32) -> Course {
        let modules = (1..=n)
            .map(|id| Module::new(id, format!("Module {}", id), 30).locked(id > open))
            .collect();
        Course::new("TST", "Test Course", modules).unwrap()
    }

    fn static_tracker(course: Course) -> CourseProgressTracker {
        CourseProgressTracker::new(course).with_config(TrackerConfig {
            unlock_policy: UnlockPolicy::Static,
        })
    }

    #[test]
    fn test_new_session_is_empty() {
        let tracker = CourseProgressTracker::new(test_course(10, 5));
        let summary = tracker.progress_summary();
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.total_count, 10);
        assert_eq!(summary.percent_complete, 0.0);
        assert_eq!(tracker.selected_index(), 0);
        assert!(!tracker.is_course_complete());
    }

    #[test]
    fn test_total_duration() {
        let modules = [45, 60, 75, 90, 60, 45]
            .into_iter()
            .enumerate()
            .map(|(i, minutes)| Module::new(ModuleId::from_index(i), "m", minutes))
            .collect();
        let course = Course::new("TST", "Test", modules).unwrap();
        let summary = CourseProgressTracker::new(course).progress_summary();
        assert_eq!(summary.total_duration_minutes, 375);
        assert_eq!(summary.total_duration_label(), "6h 15min");
    }

    #[test]
    fn test_select_unlocked_module() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        assert_eq!(tracker.select_module(3), Ok(true));
        assert_eq!(tracker.selected_index(), 3);
    }

    #[test]
    fn test_select_locked_module_is_noop() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        tracker.select_module(2).unwrap();
        assert_eq!(tracker.select_module(7), Ok(false));
        assert_eq!(tracker.selected_index(), 2);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        tracker.select_module(1).unwrap();
        assert!(matches!(
            tracker.select_module(10),
            Err(ProgressError::InvalidArgument(_))
        ));
        assert_eq!(tracker.selected_index(), 1);
    }

    #[test]
    fn test_complete_out_of_range() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        let before = tracker.state().clone();
        assert!(matches!(
            tracker.complete_module(ModuleId::new(0)),
            Err(ProgressError::InvalidArgument(_))
        ));
        assert!(matches!(
            tracker.complete_module(ModuleId::new(11)),
            Err(ProgressError::InvalidArgument(_))
        ));
        assert_eq!(tracker.state(), &before);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut once = CourseProgressTracker::new(test_course(10, 5));
        once.complete_module(ModuleId::new(3)).unwrap();

        let mut twice = CourseProgressTracker::new(test_course(10, 5));
        let first = twice.complete_module(ModuleId::new(3)).unwrap();
        let second = twice.complete_module(ModuleId::new(3)).unwrap();

        assert!(first.newly_completed);
        assert!(!second.newly_completed);
        assert_eq!(once.state(), twice.state());
        assert_eq!(twice.progress_summary().completed_count, 1);
    }

    #[test]
    fn test_completed_count_monotonic() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        let mut last = 0;
        for id in [4, 1, 4, 10, 2, 2, 7, 1, 9] {
            tracker.complete_module(ModuleId::new(id)).unwrap();
            let count = tracker.progress_summary().completed_count;
            assert!(count >= last);
            last = count;
        }
        assert_eq!(last, 6);
    }

    #[test]
    fn test_percent_bounds() {
        let mut tracker = CourseProgressTracker::new(test_course(12, 5));
        for id in 1..=12 {
            let summary = tracker.progress_summary();
            assert!((0.0..=100.0).contains(&summary.percent_complete));
            assert!(summary.percent_complete < 100.0);
            tracker.complete_module(ModuleId::new(id)).unwrap();
        }
        assert_eq!(tracker.progress_summary().percent_complete, 100.0);
        assert!(tracker.is_course_complete());
    }

    #[test]
    fn test_auto_advance() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        let outcome = tracker.complete_module(ModuleId::new(2)).unwrap();
        assert_eq!(outcome.selected_index, 2);
        assert_eq!(tracker.selected_module().id, ModuleId::new(3));
    }

    #[test]
    fn test_last_module_keeps_selection() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 10));
        tracker.select_module(4).unwrap();
        tracker.complete_module(ModuleId::new(10)).unwrap();
        assert_eq!(tracker.selected_index(), 4);
    }

    #[test]
    fn test_first_half_scenario() {
        let mut tracker = static_tracker(test_course(10, 5));
        for id in 1..=5 {
            tracker.complete_module(ModuleId::new(id)).unwrap();
        }
        let summary = tracker.progress_summary();
        assert_eq!(summary.completed_count, 5);
        assert_eq!(summary.percent_complete, 50.0);
        assert_eq!(summary.remaining_duration_minutes, 150);
        // completing module 5 advances to module 6 even though it is locked
        assert_eq!(tracker.selected_index(), 5);
        assert!(!tracker.is_course_complete());
    }

    #[test]
    fn test_full_course_scenario() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        let mut triggered = Vec::new();
        for id in 1..=10 {
            let outcome = tracker.complete_module(ModuleId::new(id)).unwrap();
            triggered.push(outcome.course_completed);
        }
        assert_eq!(tracker.progress_summary().percent_complete, 100.0);
        assert!(tracker.is_course_complete());
        assert_eq!(triggered.iter().filter(|t| **t).count(), 1);
        assert!(triggered[9]);

        let again = tracker.complete_module(ModuleId::new(10)).unwrap();
        assert!(!again.course_completed);
    }

    #[test]
    fn test_static_policy_never_unlocks() {
        let mut tracker = static_tracker(test_course(10, 5));
        tracker.complete_module(ModuleId::new(5)).unwrap();
        assert!(!tracker.is_unlocked(5));
        assert_eq!(tracker.module_status(5), Some(ModuleStatus::Locked));
        assert_eq!(tracker.select_module(5), Ok(false));
    }

    #[test]
    fn test_sequential_policy_unlocks_next() {
        let mut tracker = CourseProgressTracker::new(test_course(10, 5));
        tracker.select_module(0).unwrap();
        assert!(!tracker.is_unlocked(5));

        tracker.complete_module(ModuleId::new(5)).unwrap();
        assert!(tracker.is_unlocked(5));
        assert!(!tracker.is_unlocked(6));
        assert_eq!(tracker.module_status(5), Some(ModuleStatus::Unlocked));
        assert_eq!(tracker.module_status(4), Some(ModuleStatus::Completed));
        assert_eq!(tracker.module_status(10), None);
    }

    #[test]
    fn test_module_views() {
        let mut tracker = CourseProgressTracker::new(test_course(4, 2));
        tracker.complete_module(ModuleId::new(1)).unwrap();
        let views = tracker.module_views();
        let statuses: Vec<_> = views.iter().map(|v| v.status).collect();
        assert_eq!(
            statuses,
            vec![
                ModuleStatus::Completed,
                ModuleStatus::Unlocked,
                ModuleStatus::Locked,
                ModuleStatus::Locked
            ]
        );
        assert!(views[1].selected);
        assert_eq!(views.iter().filter(|v| v.selected).count(), 1);
    }

    #[test]
    fn test_complete_selected() {
        let mut tracker = CourseProgressTracker::new(test_course(3, 3));
        tracker.select_module(1).unwrap();
        tracker.complete_selected().unwrap();
        assert!(tracker.is_completed(ModuleId::new(2)));
        assert_eq!(tracker.selected_index(), 2);
    }

    #[test]
    fn test_certificate_requires_completion() {
        let mut tracker = CourseProgressTracker::new(test_course(3, 3));
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        tracker.complete_module(ModuleId::new(1)).unwrap();
        assert_eq!(
            tracker.issue_certificate("John Smith", date),
            Err(ProgressError::CourseIncomplete { completed: 1, total: 3 })
        );
    }

    #[test]
    fn test_certificate_issue() {
        let mut tracker = CourseProgressTracker::new(test_course(3, 3));
        for id in 1..=3 {
            tracker.complete_module(ModuleId::new(id)).unwrap();
        }
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let first = tracker.issue_certificate(" John Smith ", date).unwrap();
        let second = tracker.issue_certificate("John Smith", date).unwrap();

        assert_eq!(first.course_name, "Test Course");
        assert_eq!(first.contractor_name, "John Smith");
        assert_eq!(first.course_hours, 1.5);
        assert_eq!(first.certificate_id.prefix(), "TST");
        assert_ne!(first.certificate_id, second.certificate_id);

        assert!(matches!(
            tracker.issue_certificate("  ", date),
            Err(ProgressError::InvalidArgument(_))
        ));
    }
}
