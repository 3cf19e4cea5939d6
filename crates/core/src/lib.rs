//! Training portal core data models.
//!
//! Courses, modules, the resource catalog and the completion record
//! consumed by certificate renderers. Everything here is immutable
//! display data; session state lives in `nrp-progress`.

#![warn(missing_docs)]

mod id;
mod error;
mod duration;
mod module;
mod course;
mod resource;
mod certificate;

pub mod catalog;

pub use id::*;
pub use error::{CatalogError, RenderError, Result};
pub use duration::{format_minutes, minutes_to_hours, parse_minutes};
pub use module::Module;
pub use course::{Course, CourseDetail, DEFAULT_INSTRUCTOR};
pub use resource::{Resource, ResourceCatalog, ResourceCategory, ResourceExtent, ResourceKind};
pub use certificate::{CertificateRenderer, CompletionRecord};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
