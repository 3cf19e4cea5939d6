//! Identifiers for modules and issued certificates.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier of a module within its course.
///
/// Ids are 1-based and match the module's position in the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Wrap a raw module number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id of the module at a zero-based position.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Raw module number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position this id refers to, if any.
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl From<u32> for ModuleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for an issued certificate, e.g. `WRT-01HV...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId {
    prefix: String,
    ulid: Ulid,
}

impl CertificateId {
    /// Generate a new CertificateId for a course code.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ulid: Ulid::new(),
        }
    }

    /// Course code prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

/// Errors parsing a certificate id string.
#[derive(Debug, thiserror::Error)]
pub enum CertificateIdError {
    /// No `PREFIX-` separator present
    #[error("certificate id has no course prefix")]
    MissingPrefix,

    /// The ULID part failed to decode
    #[error("invalid certificate ulid: {0}")]
    Ulid(#[from] ulid::DecodeError),
}

impl std::str::FromStr for CertificateId {
    type Err = CertificateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid) = s.rsplit_once('-').ok_or(CertificateIdError::MissingPrefix)?;
        if prefix.is_empty() {
            return Err(CertificateIdError::MissingPrefix);
        }
        Ok(Self {
            prefix: prefix.to_string(),
            ulid: ulid.parse()?,
        })
    }
}
