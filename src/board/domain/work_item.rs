//! Work item aggregate root: a car plus its repair job.

use super::{
    BoardDomainError, CarCode, CompletionEvent, EstimatedMinutes, MechanicName, Priority,
    SectionId, TestDriveRecord, TestDriveState, WorkItemId, WorkStatus,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for checking a car into a work section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInDetails {
    /// Car code (VIN or internal code).
    pub car_code: CarCode,
    /// Car model, free text.
    pub car_model: String,
    /// Section the car enters; authoritative for queue membership.
    pub section_id: SectionId,
    /// Mechanic assigned at check-in, if any.
    pub mechanic: Option<MechanicName>,
    /// Priority tier for active-slot admission.
    pub priority: Priority,
    /// Effort estimate in whole minutes.
    pub estimate: EstimatedMinutes,
    /// Initial free-text note, if any.
    pub note: Option<String>,
}

/// Work item aggregate root.
///
/// Every successful mutation touches `updated_at` and bumps `revision`; the
/// revision is the optimistic-concurrency token checked by repository
/// `update` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    id: WorkItemId,
    car_code: CarCode,
    car_model: String,
    section_id: SectionId,
    mechanic: Option<MechanicName>,
    priority: Priority,
    status: WorkStatus,
    estimate: EstimatedMinutes,
    notes: Vec<String>,
    test_drive: TestDriveState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    revision: u64,
}

impl WorkItem {
    /// Creates a new work item as the car enters a work section.
    #[must_use]
    pub fn check_in(details: CheckInDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let notes = details.note.into_iter().collect();

        Self {
            id: WorkItemId::new(),
            car_code: details.car_code,
            car_model: details.car_model,
            section_id: details.section_id,
            mechanic: details.mechanic,
            priority: details.priority,
            status: WorkStatus::Scheduled,
            estimate: details.estimate,
            notes,
            test_drive: TestDriveState::Available,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
            revision: 0,
        }
    }

    /// Returns the work item identifier.
    #[must_use]
    pub const fn id(&self) -> WorkItemId {
        self.id
    }

    /// Returns the car code.
    #[must_use]
    pub const fn car_code(&self) -> &CarCode {
        &self.car_code
    }

    /// Returns the car model.
    #[must_use]
    pub fn car_model(&self) -> &str {
        &self.car_model
    }

    /// Returns the section this item belongs to.
    #[must_use]
    pub const fn section_id(&self) -> &SectionId {
        &self.section_id
    }

    /// Returns the assigned mechanic, if any.
    #[must_use]
    pub const fn mechanic(&self) -> Option<&MechanicName> {
        self.mechanic.as_ref()
    }

    /// Returns the priority tier.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> WorkStatus {
        self.status
    }

    /// Returns the effort estimate.
    #[must_use]
    pub const fn estimate(&self) -> EstimatedMinutes {
        self.estimate
    }

    /// Returns the free-text notes in append order.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns the test-drive sub-state.
    #[must_use]
    pub const fn test_drive(&self) -> &TestDriveState {
        &self.test_drive
    }

    /// Returns the check-in timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the item was completed, if it has been.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the optimistic-concurrency revision.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Changes the lifecycle status through the transition guard.
    ///
    /// Completing the item records `completed_at` so elapsed time against
    /// the estimate is available to the completion event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStatusTransition`] when the state
    /// machine forbids the transition.
    pub fn change_status(
        &mut self,
        new_status: WorkStatus,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if !self.status.can_transition_to(new_status) {
            return Err(BoardDomainError::InvalidStatusTransition {
                from: self.status.as_str().to_owned(),
                to: new_status.as_str().to_owned(),
            });
        }
        self.status = new_status;
        if new_status == WorkStatus::Completed {
            self.completed_at = Some(clock.utc());
        }
        self.touch(clock);
        Ok(())
    }

    /// Reassigns the item to another section, optionally with a new
    /// mechanic. The section id is authoritative: after a move the item
    /// belongs to the destination queue.
    pub fn reassign(
        &mut self,
        section_id: SectionId,
        mechanic: Option<MechanicName>,
        clock: &impl Clock,
    ) {
        self.section_id = section_id;
        if let Some(name) = mechanic {
            self.mechanic = Some(name);
        }
        self.touch(clock);
    }

    /// Appends a free-text note.
    pub fn append_note(&mut self, note: impl Into<String>, clock: &impl Clock) {
        self.notes.push(note.into());
        self.touch(clock);
    }

    /// Sends the car out on a test drive.
    ///
    /// # Errors
    ///
    /// Propagates the sub-state machine's validation failures; see
    /// [`TestDriveState::start`].
    pub fn start_test_drive(
        &mut self,
        driver: &str,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        self.test_drive.start(driver, clock)?;
        self.touch(clock);
        Ok(())
    }

    /// Brings the car back from a test drive.
    ///
    /// # Errors
    ///
    /// Propagates the sub-state machine's validation failures; see
    /// [`TestDriveState::end`].
    pub fn end_test_drive(
        &mut self,
        clock: &impl Clock,
    ) -> Result<TestDriveRecord, BoardDomainError> {
        let record = self.test_drive.end(clock)?;
        self.touch(clock);
        Ok(record)
    }

    /// Bars the car from test drives, e.g. while it is up on a lift.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TestDriveAlreadyStarted`] when the car is
    /// currently out; it must come back before it can be barred.
    pub fn bar_test_drives(&mut self, clock: &impl Clock) -> Result<(), BoardDomainError> {
        self.test_drive.make_unavailable()?;
        self.touch(clock);
        Ok(())
    }

    /// Clears a test-drive bar. No-op unless the car was barred.
    pub fn allow_test_drives(&mut self, clock: &impl Clock) {
        if self.test_drive.make_available() {
            self.touch(clock);
        }
    }

    /// Builds the completion contract for downstream consumers.
    ///
    /// Returns `None` unless the item has been completed.
    #[must_use]
    pub fn completion_event(&self) -> Option<CompletionEvent> {
        let completed_at = self.completed_at?;
        Some(CompletionEvent {
            item_id: self.id,
            car_code: self.car_code.to_string(),
            car_model: self.car_model.clone(),
            section_id: self.section_id.clone(),
            mechanic: self.mechanic.as_ref().map(ToString::to_string),
            checked_in_at: self.created_at,
            completed_at,
            estimated_minutes: self.estimate.value(),
            actual_minutes: (completed_at - self.created_at).num_minutes(),
            notes: self.notes.clone(),
        })
    }

    /// Updates `updated_at` and bumps the revision.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.revision += 1;
    }
}
