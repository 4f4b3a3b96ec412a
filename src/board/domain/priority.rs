//! Priority tiers controlling active-slot admission order.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work item priority tier.
///
/// The ordering is strict: urgent work outranks priority-client work, which
/// outranks normal work. The derived [`Ord`] follows that ranking, so
/// sorting by `Reverse(priority)` yields admission order. Equal priorities
/// keep arrival order (the partition sort is stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine work, served in arrival order.
    Normal,
    /// Work for a priority client, served ahead of normal work.
    PriorityClient,
    /// Urgent work, served first.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::PriorityClient => "priority_client",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "normal" => Ok(Self::Normal),
            "priority_client" => Ok(Self::PriorityClient),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
