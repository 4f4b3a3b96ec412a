//! Test-drive sub-state attached to a work item.
//!
//! The sub-state is orthogonal to the main work status: a scheduled or
//! paused job can have its car out on a test drive. The duration tracking
//! is advisory (for reporting), not a timeout.

use super::BoardDomainError;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Availability of a car for test drives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TestDriveState {
    /// Car can be taken out.
    #[default]
    Available,
    /// Car is out with a driver.
    OnTestDrive {
        /// Driver who took the car out.
        driver: String,
        /// When the drive started.
        started_at: DateTime<Utc>,
    },
    /// Car cannot be taken out (e.g. mid-repair on a lift).
    NotAvailable,
}

/// Outcome of a finished test drive, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDriveRecord {
    /// Driver who took the car out.
    pub driver: String,
    /// When the drive started.
    pub started_at: DateTime<Utc>,
    /// When the drive ended.
    pub ended_at: DateTime<Utc>,
    /// Elapsed drive time.
    pub duration: TimeDelta,
}

impl TestDriveState {
    /// Sends the car out with the named driver.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DriverNameRequired`] when the driver name
    /// is empty, [`BoardDomainError::TestDriveAlreadyStarted`] when a drive
    /// is already in progress (no double-start), or
    /// [`BoardDomainError::TestDriveUnavailable`] when the car cannot be
    /// taken out.
    pub(crate) fn start(
        &mut self,
        driver: &str,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        let name = driver.trim();
        if name.is_empty() {
            return Err(BoardDomainError::DriverNameRequired);
        }
        match self {
            Self::OnTestDrive { driver: current, .. } => {
                Err(BoardDomainError::TestDriveAlreadyStarted {
                    driver: current.clone(),
                })
            }
            Self::NotAvailable => Err(BoardDomainError::TestDriveUnavailable),
            Self::Available => {
                *self = Self::OnTestDrive {
                    driver: name.to_owned(),
                    started_at: clock.utc(),
                };
                Ok(())
            }
        }
    }

    /// Bars the car from test drives.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TestDriveAlreadyStarted`] when a drive is
    /// in progress; the car must come back before it can be barred.
    pub(crate) fn make_unavailable(&mut self) -> Result<(), BoardDomainError> {
        match self {
            Self::OnTestDrive { driver, .. } => {
                Err(BoardDomainError::TestDriveAlreadyStarted {
                    driver: driver.clone(),
                })
            }
            Self::Available | Self::NotAvailable => {
                *self = Self::NotAvailable;
                Ok(())
            }
        }
    }

    /// Clears a test-drive bar. Returns whether the state changed.
    pub(crate) fn make_available(&mut self) -> bool {
        if matches!(self, Self::NotAvailable) {
            *self = Self::Available;
            return true;
        }
        false
    }

    /// Brings the car back and returns the drive record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TestDriveNotStarted`] unless a drive is
    /// in progress.
    pub(crate) fn end(&mut self, clock: &impl Clock) -> Result<TestDriveRecord, BoardDomainError> {
        match self {
            Self::OnTestDrive { driver, started_at } => {
                let ended_at = clock.utc();
                let record = TestDriveRecord {
                    driver: driver.clone(),
                    started_at: *started_at,
                    ended_at,
                    duration: ended_at - *started_at,
                };
                *self = Self::Available;
                Ok(record)
            }
            Self::Available | Self::NotAvailable => Err(BoardDomainError::TestDriveNotStarted),
        }
    }
}
