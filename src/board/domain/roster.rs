//! Deterministic mechanic assignment.

use super::MechanicName;

/// Ordered list of mechanics available for assignment.
///
/// Assignment is least-loaded: the mechanic with the fewest open items
/// wins, ties broken by roster order. Deterministic by construction; the
/// roster never randomises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MechanicRoster {
    mechanics: Vec<MechanicName>,
}

impl MechanicRoster {
    /// Creates a roster from mechanics in priority order.
    #[must_use]
    pub fn new(mechanics: impl IntoIterator<Item = MechanicName>) -> Self {
        Self {
            mechanics: mechanics.into_iter().collect(),
        }
    }

    /// Returns whether the roster has no mechanics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mechanics.is_empty()
    }

    /// Returns the mechanics in roster order.
    #[must_use]
    pub fn mechanics(&self) -> &[MechanicName] {
        &self.mechanics
    }

    /// Picks the least-loaded mechanic.
    ///
    /// `open_count` reports the number of open (non-completed) items
    /// currently assigned to a mechanic. Returns `None` for an empty roster.
    #[must_use]
    pub fn least_loaded<F>(&self, open_count: F) -> Option<&MechanicName>
    where
        F: Fn(&MechanicName) -> usize,
    {
        // min_by_key returns the first minimum, which preserves roster order
        // as the tie-breaker.
        self.mechanics.iter().min_by_key(|mechanic| open_count(mechanic))
    }
}
