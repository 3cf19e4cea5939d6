//! Plain-text views of courses, progress and certificates.

use std::fmt::Write;

use nrp_core::{
    format_minutes, CertificateRenderer, CompletionRecord, Course, RenderError, ResourceCategory,
};
use nrp_progress::{CourseProgressTracker, ModuleStatus, ProgressSummary};

const BAR_WIDTH: usize = 20;

/// Course header with tagline and sidebar details.
pub fn course_header(course: &Course) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} [{}]\n", course.name, course.code));
    if !course.tagline.is_empty() {
        out.push_str(&format!("{}\n", course.tagline));
    }
    for detail in &course.details {
        out.push_str(&format!("  {}: {}\n", detail.label, detail.value));
    }
    if !course.resources.is_empty() {
        out.push_str(&format!("  Resources: {}\n", course.resources.join(", ")));
    }
    out
}

/// Module list with status markers.
pub fn module_list(tracker: &CourseProgressTracker, with_lessons: bool) -> String {
    let mut out = String::new();
    for view in tracker.module_views() {
        let marker = match view.status {
            ModuleStatus::Completed => "[x]",
            ModuleStatus::Unlocked => "[ ]",
            ModuleStatus::Locked => "[#]",
        };
        let cursor = if view.selected { ">" } else { " " };
        out.push_str(&format!(
            "{} {} Module {}: {} ({} min)\n",
            cursor, marker, view.module.id, view.module.title, view.module.duration_minutes
        ));
        if with_lessons {
            for lesson in &view.module.lessons {
                out.push_str(&format!("        - {}\n", lesson));
            }
        }
    }
    out
}

/// One-line progress summary with a bar.
pub fn summary_line(summary: &ProgressSummary) -> String {
    let filled = (summary.percent_complete / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {} of {} modules completed ({:.0}%) | Total Duration {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        summary.completed_count,
        summary.total_count,
        summary.percent_complete,
        format_minutes(summary.total_duration_minutes),
    )
}

/// Resource categories and their items.
pub fn resource_list(categories: &[&ResourceCategory]) -> String {
    let mut out = String::new();
    for category in categories {
        out.push_str(&format!("{}\n", category.name));
        for item in &category.items {
            out.push_str(&format!("  - {}\n", item));
        }
    }
    out
}

/// Renders a framed plain-text certificate.
#[derive(Debug, Default)]
pub struct TextCertificateRenderer;

impl CertificateRenderer for TextCertificateRenderer {
    fn render(&self, record: &CompletionRecord) -> Result<String, RenderError> {
        if record.contractor_name.is_empty() {
            return Err(RenderError::MissingField("contractor_name"));
        }

        let lines = [
            "CERTIFICATE OF COMPLETION".to_string(),
            String::new(),
            "This certifies that".to_string(),
            record.contractor_name.clone(),
            "has successfully completed".to_string(),
            record.course_name.clone(),
            format!("{:.1} course hours", record.course_hours),
            String::new(),
            format!("Issued by {}", record.instructor_name),
            format!("Date: {}", record.completion_date.format("%d/%m/%Y")),
            format!("Certificate ID: {}", record.certificate_id),
        ];
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;

        let mut out = String::new();
        writeln!(out, "+{}+", "-".repeat(width))?;
        for line in &lines {
            let len = line.chars().count();
            let left = (width - len) / 2;
            writeln!(out, "|{}{}{}|", " ".repeat(left), line, " ".repeat(width - len - left))?;
        }
        writeln!(out, "+{}+", "-".repeat(width))?;
        Ok(out)
    }
}
