//! Error types for catalog construction and certificate rendering.

use crate::ModuleId;

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or loading course data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A course must contain at least one module
    #[error("course '{0}' has no modules")]
    EmptyCourse(String),

    /// Module ids must run 1..N in sequence order
    #[error("module at position {position} has id {found}, expected {expected}")]
    NonSequentialId {
        /// Zero-based position in the module list
        position: usize,
        /// Id the module carries
        found: ModuleId,
        /// Id the position requires
        expected: ModuleId,
    },

    /// A duration label without a leading minute count
    #[error("invalid duration label: {0:?}")]
    InvalidDuration(String),

    /// Module durations sum past `u32::MAX` minutes
    #[error("course '{0}' total duration overflows")]
    DurationOverflow(String),

    /// I/O error while reading a course file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by a certificate renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The record is missing a field the renderer needs
    #[error("missing certificate field: {0}")]
    MissingField(&'static str),

    /// Formatting failed
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}
