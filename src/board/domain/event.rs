//! Structured events emitted by the board.

use super::{SectionId, WorkItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind discriminant for board notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardEventKind {
    /// A car entered a work section.
    CheckedIn,
    /// A work item's status changed.
    StatusChanged,
    /// A work item moved between sections.
    ItemMoved,
    /// A move was rejected because the destination was full.
    MoveRejected,
    /// A client asked for expedited handling; a dispatcher must act.
    EscalationRequested,
    /// A car went out on a test drive.
    TestDriveStarted,
    /// A car came back from a test drive.
    TestDriveEnded,
    /// A work item was completed.
    Completed,
}

/// Fire-and-forget notification describing a board mutation or rejection.
///
/// Every mutation and every non-fatal rejection produces one of these for
/// the toast/alert layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEvent {
    /// What happened.
    pub kind: BoardEventKind,
    /// Section the event concerns.
    pub section_id: SectionId,
    /// Item the event concerns.
    pub item_id: WorkItemId,
    /// Human-readable summary for shop staff.
    pub message: String,
}

/// Completion contract handed to downstream report and costing consumers.
///
/// Carries car identity, the assigned mechanic, timing against the estimate,
/// and the free-text notes. Nothing else is guaranteed to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEvent {
    /// Completed work item.
    pub item_id: WorkItemId,
    /// Car code (VIN or internal code).
    pub car_code: String,
    /// Car model.
    pub car_model: String,
    /// Section the job finished in.
    pub section_id: SectionId,
    /// Mechanic who did the work, if one was assigned.
    pub mechanic: Option<String>,
    /// When the car was checked in.
    pub checked_in_at: DateTime<Utc>,
    /// When the job was completed.
    pub completed_at: DateTime<Utc>,
    /// Estimated effort in minutes.
    pub estimated_minutes: u32,
    /// Actual elapsed time from check-in to completion, in minutes.
    pub actual_minutes: i64,
    /// Free-text notes in append order.
    pub notes: Vec<String>,
}
