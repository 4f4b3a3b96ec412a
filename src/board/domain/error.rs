//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The car code is empty or contains whitespace.
    #[error("invalid car code '{0}', expected a non-empty code without whitespace")]
    InvalidCarCode(String),

    /// The section identifier is not a snake_case ASCII identifier.
    #[error("invalid section id '{0}', expected lowercase snake_case")]
    InvalidSectionId(String),

    /// The mechanic name is empty after trimming.
    #[error("mechanic name must not be empty")]
    EmptyMechanicName,

    /// The test-drive driver name is empty after trimming.
    #[error("driver name required")]
    DriverNameRequired,

    /// The estimated effort is zero.
    #[error("estimated effort must be at least one minute")]
    ZeroEstimate,

    /// The requested status transition is not allowed.
    #[error("cannot change status from '{from}' to '{to}'")]
    InvalidStatusTransition {
        /// Current status of the work item.
        from: String,
        /// Rejected target status.
        to: String,
    },

    /// The car is already out on a test drive.
    #[error("car is already on a test drive with {driver}")]
    TestDriveAlreadyStarted {
        /// Driver currently out with the car.
        driver: String,
    },

    /// The car is not available for test drives.
    #[error("car is not available for a test drive")]
    TestDriveUnavailable,

    /// No test drive is in progress.
    #[error("no test drive in progress")]
    TestDriveNotStarted,
}

/// Error returned while parsing work statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown work status: {0}")]
pub struct ParseWorkStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
