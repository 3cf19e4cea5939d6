//! Course progress tracking.
//!
//! Session-scoped module completion, unlock gating, aggregate progress and
//! the certificate trigger over an immutable [`nrp_core::Course`].

#![warn(missing_docs)]

pub mod tracker;
pub mod policy;
pub mod estimator;

pub use tracker::{
    CompletionOutcome, CourseProgressTracker, ModuleStatus, ModuleView, ProgressError,
    ProgressState, ProgressSummary, Result,
};
pub use policy::{TrackerConfig, UnlockPolicy};
pub use estimator::{CompletionEstimator, TimeEstimate};
