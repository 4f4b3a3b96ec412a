//! Scheduler board orchestration over section queues.

use crate::board::{
    domain::{
        BoardDomainError, BoardEvent, BoardEventKind, CarCode, CheckInDetails, EstimatedMinutes,
        MechanicName, MechanicRoster, Priority, Section, SectionId, SectionSnapshot,
        TestDriveRecord, WorkItem, WorkItemId, WorkStatus, partition,
    },
    ports::{BoardNotifier, CompletionSink, WorkItemRepository, WorkItemRepositoryError},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for checking a car into a work section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInRequest {
    section_id: String,
    car_code: String,
    car_model: String,
    estimate_minutes: u32,
    priority: Priority,
    mechanic: Option<String>,
    note: Option<String>,
}

impl CheckInRequest {
    /// Creates a request with required fields; priority defaults to normal.
    #[must_use]
    pub fn new(
        section_id: impl Into<String>,
        car_code: impl Into<String>,
        car_model: impl Into<String>,
        estimate_minutes: u32,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            car_code: car_code.into(),
            car_model: car_model.into(),
            estimate_minutes,
            priority: Priority::Normal,
            mechanic: None,
            note: None,
        }
    }

    /// Sets the priority tier.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Names the mechanic instead of letting the roster assign one.
    #[must_use]
    pub fn with_mechanic(mut self, mechanic: impl Into<String>) -> Self {
        self.mechanic = Some(mechanic.into());
        self
    }

    /// Attaches an initial free-text note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Service-level errors for board operations.
///
/// Every variant renders a human-readable reason; the board is operated by
/// shop staff making real-time dispatch decisions.
#[derive(Debug, Error)]
pub enum BoardError {
    /// No section with the given identifier is configured.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// The item is not in the named section's queue.
    #[error("work item {item_id} is not in section '{section_id}'")]
    ItemNotFound {
        /// Section that was searched.
        section_id: SectionId,
        /// Item that was not found.
        item_id: WorkItemId,
    },

    /// The destination has no free slot for a move.
    #[error("cannot move to '{0}': target full")]
    TargetFull(SectionId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkItemRepositoryError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// The aggregate of all section queues.
///
/// The board exclusively owns the queues and the queues own their items;
/// moving an item is a remove-then-insert, never a shared reference.
/// Operations take `&mut self` and await the repository write before
/// committing in memory, so a mutation is either fully applied and
/// persisted or not applied at all.
pub struct SchedulerBoard<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<dyn BoardNotifier>,
    completion_sink: Arc<dyn CompletionSink>,
    clock: Arc<C>,
    roster: MechanicRoster,
    sections: Vec<Section>,
    queues: HashMap<SectionId, Vec<WorkItem>>,
}

impl<R, C> SchedulerBoard<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    /// Loads the board from the repository.
    ///
    /// Stored items are distributed to their section queues in stored
    /// order, which preserves arrival order for priority ties.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSection`] when a stored item names a
    /// section that is not configured, or [`BoardError::Repository`] when
    /// the read fails.
    pub async fn load(
        sections: Vec<Section>,
        roster: MechanicRoster,
        repository: Arc<R>,
        notifier: Arc<dyn BoardNotifier>,
        completion_sink: Arc<dyn CompletionSink>,
        clock: Arc<C>,
    ) -> BoardResult<Self> {
        let mut queues: HashMap<SectionId, Vec<WorkItem>> = sections
            .iter()
            .map(|section| (section.id().clone(), Vec::new()))
            .collect();
        for item in repository.list_all().await? {
            let queue = queues
                .get_mut(item.section_id())
                .ok_or_else(|| BoardError::UnknownSection(item.section_id().to_string()))?;
            queue.push(item);
        }

        Ok(Self {
            repository,
            notifier,
            completion_sink,
            clock,
            roster,
            sections,
            queues,
        })
    }

    /// Returns the configured sections.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the mechanic roster.
    #[must_use]
    pub const fn roster(&self) -> &MechanicRoster {
        &self.roster
    }

    /// Recomputes the active/pending/completed partition for a section.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSection`] for an unconfigured section.
    pub fn section_snapshot(&self, section_id: &SectionId) -> BoardResult<SectionSnapshot> {
        let capacity = self.section(section_id)?.capacity().get();
        Ok(partition(self.queue(section_id)?, capacity))
    }

    /// Checks a car into a work section.
    ///
    /// Never capacity-rejected: the pending backlog is unbounded. When no
    /// mechanic is named, the least-loaded roster mechanic is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSection`] for an unconfigured section,
    /// [`BoardError::Domain`] on validation failure, or
    /// [`BoardError::Repository`] when the insert fails (the queue is left
    /// untouched).
    pub async fn check_in(&mut self, request: CheckInRequest) -> BoardResult<WorkItem> {
        let section_id = SectionId::new(request.section_id)?;
        let section_name = self.section(&section_id)?.name().to_owned();
        let car_code = CarCode::new(request.car_code)?;
        let estimate = EstimatedMinutes::new(request.estimate_minutes)?;
        let mechanic = match request.mechanic {
            Some(name) => Some(MechanicName::new(name)?),
            None => self.least_loaded_mechanic(),
        };

        let item = WorkItem::check_in(
            CheckInDetails {
                car_code,
                car_model: request.car_model,
                section_id: section_id.clone(),
                mechanic,
                priority: request.priority,
                estimate,
                note: request.note,
            },
            &*self.clock,
        );
        self.repository.insert(&item).await?;

        let Some(queue) = self.queues.get_mut(&section_id) else {
            return Err(BoardError::UnknownSection(section_id.to_string()));
        };
        queue.push(item.clone());
        self.emit(
            BoardEventKind::CheckedIn,
            section_id,
            item.id(),
            format!("{} checked in to {section_name}", item.car_code()),
        );
        Ok(item)
    }

    /// Changes a work item's status through the transition guard.
    ///
    /// The mutation is applied to a copy, written through the repository,
    /// and only committed to the queue once the write succeeds. Completing
    /// an item emits the completion event for downstream consumers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSection`] or
    /// [`BoardError::ItemNotFound`] on lookup failure,
    /// [`BoardError::Domain`] on a forbidden transition, or
    /// [`BoardError::Repository`] when the write fails (the queue is left
    /// unchanged).
    pub async fn change_status(
        &mut self,
        section_id: &SectionId,
        item_id: WorkItemId,
        new_status: WorkStatus,
    ) -> BoardResult<WorkItem> {
        let mut changed = self.find_item(section_id, item_id)?;
        changed.change_status(new_status, &*self.clock)?;
        let committed = self.persist_and_commit(section_id, changed).await?;

        if let Some(event) = committed.completion_event() {
            self.emit(
                BoardEventKind::Completed,
                section_id.clone(),
                item_id,
                format!(
                    "repair completed for {} ({})",
                    committed.car_model(),
                    committed.car_code()
                ),
            );
            self.completion_sink.accept(&event);
        } else {
            self.emit(
                BoardEventKind::StatusChanged,
                section_id.clone(),
                item_id,
                format!("status changed to {new_status}"),
            );
        }
        Ok(committed)
    }

    /// Moves a work item to another section, optionally reassigning the
    /// mechanic.
    ///
    /// Moves are capacity-checked against the destination's open
    /// (non-completed) membership; direct status changes and check-ins are
    /// not. On success the item's work type becomes the destination
    /// section.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TargetFull`] when the destination has no free
    /// slot (the item stays in its source section and a `move_rejected`
    /// notification is emitted), plus the usual lookup, validation, and
    /// repository failures.
    pub async fn move_item(
        &mut self,
        from: &SectionId,
        to: &SectionId,
        item_id: WorkItemId,
        mechanic: Option<String>,
    ) -> BoardResult<WorkItem> {
        let destination = self.section(to)?.clone();
        let current = self.find_item(from, item_id)?;

        let open_at_destination = self
            .queue(to)?
            .iter()
            .filter(|item| item.status().is_open())
            .count();
        if open_at_destination >= destination.capacity().get() {
            self.emit(
                BoardEventKind::MoveRejected,
                to.clone(),
                item_id,
                format!(
                    "cannot move {} to {}: target full",
                    current.car_code(),
                    destination.name()
                ),
            );
            return Err(BoardError::TargetFull(to.clone()));
        }

        let assignee = mechanic.map(MechanicName::new).transpose()?;
        let mut moved = current;
        moved.reassign(to.clone(), assignee, &*self.clock);
        self.repository.update(&moved).await?;

        let Some(source_queue) = self.queues.get_mut(from) else {
            return Err(BoardError::UnknownSection(from.to_string()));
        };
        source_queue.retain(|item| item.id() != item_id);
        let Some(destination_queue) = self.queues.get_mut(to) else {
            return Err(BoardError::UnknownSection(to.to_string()));
        };
        destination_queue.push(moved.clone());

        let assigned = moved
            .mechanic()
            .map_or_else(|| "unassigned".to_owned(), |name| format!("assigned to {name}"));
        self.emit(
            BoardEventKind::ItemMoved,
            to.clone(),
            item_id,
            format!(
                "{} moved to {}, {assigned}",
                moved.car_code(),
                destination.name()
            ),
        );
        Ok(moved)
    }

    /// Raises an expedite request for a dispatcher to act on.
    ///
    /// Deliberately does not reorder or reprioritise anything: automatic
    /// priority changes in a live shop risk unsafe work reordering, so a
    /// human stays in the loop.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownSection`] or
    /// [`BoardError::ItemNotFound`] on lookup failure.
    pub fn request_priority_escalation(
        &self,
        section_id: &SectionId,
        item_id: WorkItemId,
    ) -> BoardResult<()> {
        let item = self.find_item(section_id, item_id)?;
        self.emit(
            BoardEventKind::EscalationRequested,
            section_id.clone(),
            item_id,
            format!(
                "expedite requested for {} ({}), currently {}",
                item.car_code(),
                item.car_model(),
                item.priority()
            ),
        );
        Ok(())
    }

    /// Sends a car out on a test drive.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the driver name is empty or the
    /// car is already out, plus the usual lookup and repository failures.
    pub async fn start_test_drive(
        &mut self,
        section_id: &SectionId,
        item_id: WorkItemId,
        driver: &str,
    ) -> BoardResult<WorkItem> {
        let mut taken = self.find_item(section_id, item_id)?;
        taken.start_test_drive(driver, &*self.clock)?;
        let committed = self.persist_and_commit(section_id, taken).await?;
        self.emit(
            BoardEventKind::TestDriveStarted,
            section_id.clone(),
            item_id,
            format!(
                "{} out on test drive with {}",
                committed.car_code(),
                driver.trim()
            ),
        );
        Ok(committed)
    }

    /// Brings a car back from a test drive and returns the drive record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when no drive is in progress, plus
    /// the usual lookup and repository failures.
    pub async fn end_test_drive(
        &mut self,
        section_id: &SectionId,
        item_id: WorkItemId,
    ) -> BoardResult<TestDriveRecord> {
        let mut returned = self.find_item(section_id, item_id)?;
        let record = returned.end_test_drive(&*self.clock)?;
        let committed = self.persist_and_commit(section_id, returned).await?;
        self.emit(
            BoardEventKind::TestDriveEnded,
            section_id.clone(),
            item_id,
            format!(
                "{} back from test drive after {} minutes",
                committed.car_code(),
                record.duration.num_minutes()
            ),
        );
        Ok(record)
    }

    fn section(&self, section_id: &SectionId) -> BoardResult<&Section> {
        self.sections
            .iter()
            .find(|section| section.id() == section_id)
            .ok_or_else(|| BoardError::UnknownSection(section_id.to_string()))
    }

    fn queue(&self, section_id: &SectionId) -> BoardResult<&[WorkItem]> {
        self.queues
            .get(section_id)
            .map(Vec::as_slice)
            .ok_or_else(|| BoardError::UnknownSection(section_id.to_string()))
    }

    fn find_item(&self, section_id: &SectionId, item_id: WorkItemId) -> BoardResult<WorkItem> {
        self.queue(section_id)?
            .iter()
            .find(|item| item.id() == item_id)
            .cloned()
            .ok_or_else(|| BoardError::ItemNotFound {
                section_id: section_id.clone(),
                item_id,
            })
    }

    /// Writes the updated item through the repository, then replaces it in
    /// its queue. The write is confirmed before the in-memory commit.
    async fn persist_and_commit(
        &mut self,
        section_id: &SectionId,
        updated: WorkItem,
    ) -> BoardResult<WorkItem> {
        self.repository.update(&updated).await?;
        let Some(queue) = self.queues.get_mut(section_id) else {
            return Err(BoardError::UnknownSection(section_id.to_string()));
        };
        let Some(slot) = queue.iter_mut().find(|item| item.id() == updated.id()) else {
            return Err(BoardError::ItemNotFound {
                section_id: section_id.clone(),
                item_id: updated.id(),
            });
        };
        *slot = updated.clone();
        Ok(updated)
    }

    fn least_loaded_mechanic(&self) -> Option<MechanicName> {
        self.roster
            .least_loaded(|mechanic| {
                self.queues
                    .values()
                    .flatten()
                    .filter(|item| item.status().is_open() && item.mechanic() == Some(mechanic))
                    .count()
            })
            .cloned()
    }

    fn emit(
        &self,
        kind: BoardEventKind,
        section_id: SectionId,
        item_id: WorkItemId,
        message: String,
    ) {
        self.notifier.notify(&BoardEvent {
            kind,
            section_id,
            item_id,
            message,
        });
    }
}
