//! Opaque identity values referenced by history queries
//!
//! The query layer never interprets these beyond equality, ordering and
//! rendering; resolving them against stored history is the job of the
//! execution engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a commit, rendered as `major.minor` (e.g. `12.0`)
///
/// Ordering follows commit order: by `major`, then by `minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId {
    major: u64,
    minor: u32,
}

impl CommitId {
    /// Create a commit id from its two components
    pub fn new(major: u64, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Get the major component
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Get the minor component
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Get the canonical string form
    pub fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error returned when a string is not a valid `major.minor` commit id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid commit id: '{value}'")]
pub struct ParseCommitIdError {
    pub value: String,
}

impl FromStr for CommitId {
    type Err = ParseCommitIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCommitIdError {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };
        let major = major.parse::<u64>().map_err(|_| invalid())?;
        let minor = minor.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for CommitId {
    type Error = ParseCommitIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.to_string()
    }
}

/// Name of a domain type as known to the class metadata resolver
///
/// Whether the type is an entity or a value object, and which types are its
/// subtypes, is decided outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
