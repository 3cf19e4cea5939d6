//! Completion record handed to a certificate renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::id::CertificateId;

/// Everything a renderer needs to produce a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Course display name
    pub course_name: String,

    /// Learner name as printed
    pub contractor_name: String,

    /// Day the course was completed
    pub completion_date: NaiveDate,

    /// Unique per issuance
    pub certificate_id: CertificateId,

    /// Total course duration in hours
    pub course_hours: f64,

    /// Issuing instructor or organisation
    pub instructor_name: String,
}

/// Produces a display artifact for a completion record.
pub trait CertificateRenderer {
    /// Render the record.
    fn render(&self, record: &CompletionRecord) -> Result<String, RenderError>;
}
