//! Module model - one unit of course content.

use serde::{Deserialize, Serialize};

use crate::duration::parse_minutes;
use crate::error::CatalogError;
use crate::id::ModuleId;

/// A module is a single unit of a course with an ordered lesson list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModuleDef")]
pub struct Module {
    /// 1-based position in the course
    pub id: ModuleId,

    /// Module title
    pub title: String,

    /// Duration in whole minutes
    pub duration_minutes: u32,

    /// Lesson labels, display only
    pub lessons: Vec<String>,

    /// Lock flag set when the course was authored
    pub initially_locked: bool,
}

impl Module {
    /// Create an unlocked module with no lessons.
    pub fn new(id: impl Into<ModuleId>, title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            lessons: Vec::new(),
            initially_locked: false,
        }
    }

    /// Create a module from a duration label such as `"45 min"`.
    pub fn with_label(
        id: impl Into<ModuleId>,
        title: impl Into<String>,
        duration: &str,
    ) -> crate::Result<Self> {
        Ok(Self::new(id, title, parse_minutes(duration)?))
    }

    /// Set the lesson list.
    pub fn lessons<I, S>(mut self, lessons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lessons = lessons.into_iter().map(Into::into).collect();
        self
    }

    /// Set the authored lock flag.
    pub fn locked(mut self, locked: bool) -> Self {
        self.initially_locked = locked;
        self
    }
}

/// Serialized shape of a module; accepts either minutes or a label.
#[derive(Deserialize)]
struct ModuleDef {
    id: ModuleId,
    title: String,
    #[serde(alias = "duration")]
    duration_minutes: DurationDef,
    #[serde(default)]
    lessons: Vec<String>,
    #[serde(default, alias = "locked")]
    initially_locked: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationDef {
    Minutes(u32),
    Label(String),
}

impl TryFrom<ModuleDef> for Module {
    type Error = CatalogError;

    fn try_from(def: ModuleDef) -> Result<Self, Self::Error> {
        let duration_minutes = match def.duration_minutes {
            DurationDef::Minutes(m) => m,
            DurationDef::Label(label) => parse_minutes(&label)?,
        };
        Ok(Self {
            id: def.id,
            title: def.title,
            duration_minutes,
            lessons: def.lessons,
            initially_locked: def.initially_locked,
        })
    }
}
