//! Course model - an ordered, immutable sequence of modules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::id::ModuleId;
use crate::module::Module;

/// Default issuer printed on certificates.
pub const DEFAULT_INSTRUCTOR: &str = "National Restoration Projects";

/// A training course.
///
/// Module ids always run `1..N` in order; construction and deserialization
/// both reject anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CourseDef")]
pub struct Course {
    /// Short code used as certificate prefix (e.g. `WRT`)
    pub code: String,

    /// Display name
    pub name: String,

    /// One-line description
    pub tagline: String,

    /// Issuing instructor or organisation
    pub instructor: String,

    /// Sidebar facts such as focus or certification
    pub details: Vec<CourseDetail>,

    /// Course-local downloads
    pub resources: Vec<String>,

    modules: Vec<Module>,
}

/// A labelled fact about a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetail {
    /// Label, e.g. "Certification"
    pub label: String,

    /// Value, e.g. "IICRC WRT Certificate"
    pub value: String,
}

impl Course {
    /// Create a course, validating the module id sequence.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        modules: Vec<Module>,
    ) -> Result<Self> {
        let name = name.into();
        validate_modules(&name, &modules)?;
        Ok(Self {
            code: code.into(),
            name,
            tagline: String::new(),
            instructor: DEFAULT_INSTRUCTOR.to_string(),
            details: Vec::new(),
            resources: Vec::new(),
            modules,
        })
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Add a sidebar detail.
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push(CourseDetail {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Set the course-local resources.
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a course from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a course from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let course = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), code = %course.code, "loaded course file");
        Ok(course)
    }

    /// Modules in course order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Number of modules (always at least one).
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the course has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module at a zero-based position.
    pub fn module_at(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// Module by id.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        id.index().and_then(|i| self.modules.get(i))
    }

    /// Id of the last module.
    pub fn last_id(&self) -> ModuleId {
        ModuleId::from_index(self.modules.len() - 1)
    }

    /// Whether an id falls within `1..=N`.
    pub fn contains(&self, id: ModuleId) -> bool {
        self.module(id).is_some()
    }

    /// Sum of all module durations. Cannot overflow; construction checks it.
    pub fn total_duration_minutes(&self) -> u32 {
        self.modules.iter().map(|m| m.duration_minutes).sum()
    }

    /// Modules unlocked at authoring time.
    pub fn initially_unlocked(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(|m| !m.initially_locked)
    }
}

fn validate_modules(name: &str, modules: &[Module]) -> Result<()> {
    if modules.is_empty() {
        return Err(CatalogError::EmptyCourse(name.to_string()));
    }
    for (position, module) in modules.iter().enumerate() {
        let expected = ModuleId::from_index(position);
        if module.id != expected {
            return Err(CatalogError::NonSequentialId {
                position,
                found: module.id,
                expected,
            });
        }
    }
    modules
        .iter()
        .try_fold(0u32, |total, m| total.checked_add(m.duration_minutes))
        .ok_or_else(|| CatalogError::DurationOverflow(name.to_string()))?;
    Ok(())
}

#[derive(Deserialize)]
struct CourseDef {
    code: String,
    name: String,
    #[serde(default)]
    tagline: String,
    #[serde(default = "default_instructor")]
    instructor: String,
    #[serde(default)]
    details: Vec<CourseDetail>,
    #[serde(default)]
    resources: Vec<String>,
    modules: Vec<Module>,
}

fn default_instructor() -> String {
    DEFAULT_INSTRUCTOR.to_string()
}

impl TryFrom<CourseDef> for Course {
    type Error = CatalogError;

    fn try_from(def: CourseDef) -> Result<Self> {
        validate_modules(&def.name, &def.modules)?;
        Ok(Self {
            code: def.code,
            name: def.name,
            tagline: def.tagline,
            instructor: def.instructor,
            details: def.details,
            resources: def.resources,
            modules: def.modules,
        })
    }
}
