//! Pure active/pending partition of a section queue.

use super::{WorkItem, WorkStatus};
use std::cmp::Reverse;

/// A pending work item together with its 1-based queue position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    /// The waiting work item.
    pub item: WorkItem,
    /// Position in the pending queue, starting at 1.
    pub rank: usize,
}

/// Point-in-time classification of a section queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionSnapshot {
    /// Items occupying active slots, highest priority first.
    pub active: Vec<WorkItem>,
    /// Items waiting for a slot, ranked by priority then arrival order.
    pub pending: Vec<PendingEntry>,
    /// Historical completed items in arrival order.
    pub completed: Vec<WorkItem>,
}

impl SectionSnapshot {
    /// Returns the number of completed items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// Classifies queue contents into active, pending, and completed.
///
/// Completed items are split out first. The rest are stably sorted by
/// priority descending, so equal-priority items keep their insertion order;
/// the first `active_slots` of that ordering are active and the remainder
/// are pending with 1-based ranks.
///
/// The result is derived from the queue contents alone and must be
/// recomputed after every mutation, never cached: a higher-priority arrival
/// changes the split.
#[must_use]
pub fn partition(items: &[WorkItem], active_slots: usize) -> SectionSnapshot {
    let mut completed = Vec::new();
    let mut open: Vec<&WorkItem> = Vec::new();
    for item in items {
        if item.status() == WorkStatus::Completed {
            completed.push(item.clone());
        } else {
            open.push(item);
        }
    }
    open.sort_by_key(|item| Reverse(item.priority()));

    let mut active = Vec::new();
    let mut pending = Vec::new();
    for item in open {
        if active.len() < active_slots {
            active.push(item.clone());
        } else {
            pending.push(PendingEntry {
                item: item.clone(),
                rank: pending.len() + 1,
            });
        }
    }

    SectionSnapshot {
        active,
        pending,
        completed,
    }
}
