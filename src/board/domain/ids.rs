//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a work item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(Uuid);

impl WorkItemId {
    /// Creates a new random work item identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a work item identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for WorkItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for WorkItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a work section, authoritative for queue membership.
///
/// Deserializes through [`SectionId::new`], so stored data carrying an
/// invalid identifier is rejected at read time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Creates a validated section identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidSectionId`] unless the value is a
    /// non-empty lowercase ASCII identifier (`a-z`, `0-9`, `_`).
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');

        if !is_valid {
            return Err(BoardDomainError::InvalidSectionId(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the section identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized car code (VIN or internal code), stored uppercased.
///
/// Deserializes through [`CarCode::new`], so stored data carrying an
/// invalid code is rejected at read time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CarCode(String);

impl CarCode {
    /// Creates a validated car code.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidCarCode`] when the value is empty
    /// after trimming or contains interior whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(BoardDomainError::InvalidCarCode(raw));
        }
        Ok(Self(normalized.to_ascii_uppercase()))
    }

    /// Returns the car code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CarCode {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for CarCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CarCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a mechanic on the shop roster.
///
/// Deserializes through [`MechanicName::new`], so stored data carrying an
/// empty name is rejected at read time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct MechanicName(String);

impl MechanicName {
    /// Creates a validated mechanic name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMechanicName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyMechanicName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the mechanic name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MechanicName {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for MechanicName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MechanicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated repair effort in whole minutes.
///
/// Deserializes through [`EstimatedMinutes::new`], so a stored zero
/// estimate is rejected at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct EstimatedMinutes(u32);

impl EstimatedMinutes {
    /// Creates a validated effort estimate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ZeroEstimate`] when the value is zero.
    pub const fn new(value: u32) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::ZeroEstimate);
        }
        Ok(Self(value))
    }

    /// Returns the underlying number of minutes.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EstimatedMinutes {
    type Error = BoardDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for EstimatedMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
