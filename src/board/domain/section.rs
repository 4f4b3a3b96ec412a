//! Work sections and their concurrent-slot budgets.

use super::SectionId;
use std::num::NonZeroUsize;

const ONE: NonZeroUsize = NonZeroUsize::MIN;
const TWO: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// One work discipline and its active-slot budget.
///
/// Capacity is the number of jobs worked concurrently, configuration per
/// section (typically 1 or 2). It bounds only the active partition; the
/// pending backlog is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    name: String,
    capacity: NonZeroUsize,
}

impl Section {
    /// Creates a section with the given active-slot capacity.
    #[must_use]
    pub fn new(id: SectionId, name: impl Into<String>, capacity: NonZeroUsize) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }

    /// Returns the section identifier.
    #[must_use]
    pub const fn id(&self) -> &SectionId {
        &self.id
    }

    /// Returns the human-readable section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the active-slot capacity.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the standard five-discipline shop layout.
    #[must_use]
    pub fn standard_shop() -> Vec<Self> {
        [
            ("electrical", "Electrical", TWO),
            ("painting", "Painting", TWO),
            ("detailing", "Detailing", ONE),
            ("mechanical", "Mechanical", TWO),
            ("body_work", "Body Work", ONE),
        ]
        .into_iter()
        .filter_map(|(id, name, capacity)| {
            SectionId::new(id)
                .ok()
                .map(|section_id| Self::new(section_id, name, capacity))
        })
        .collect()
    }
}
