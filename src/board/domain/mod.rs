//! Domain model for the work-scheduling board.
//!
//! The board domain models work items (a car plus its repair job), section
//! queues with bounded active capacity, the pure active/pending partition,
//! and the test-drive sub-state, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod event;
mod ids;
mod partition;
mod priority;
mod roster;
mod section;
mod status;
mod test_drive;
mod work_item;

pub use error::{BoardDomainError, ParsePriorityError, ParseWorkStatusError};
pub use event::{BoardEvent, BoardEventKind, CompletionEvent};
pub use ids::{CarCode, EstimatedMinutes, MechanicName, SectionId, WorkItemId};
pub use partition::{PendingEntry, SectionSnapshot, partition};
pub use priority::Priority;
pub use roster::MechanicRoster;
pub use section::Section;
pub use status::WorkStatus;
pub use test_drive::{TestDriveRecord, TestDriveState};
pub use work_item::{CheckInDetails, WorkItem};
