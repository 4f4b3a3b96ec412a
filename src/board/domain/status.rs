//! Work item lifecycle status and its transition guard.

use super::ParseWorkStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Job is booked but work has not started.
    Scheduled,
    /// Job is being worked on.
    InProgress,
    /// Work is temporarily paused.
    Paused,
    /// Job is finished; the item is historical.
    Completed,
}

impl WorkStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the item still occupies or waits for an active slot.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Completed)
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// Completed is terminal and self-transitions are rejected.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Scheduled, Self::InProgress)
                | (Self::InProgress, Self::Paused | Self::Completed)
                | (Self::Paused, Self::InProgress | Self::Completed)
        )
    }
}

impl TryFrom<&str> for WorkStatus {
    type Error = ParseWorkStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseWorkStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
