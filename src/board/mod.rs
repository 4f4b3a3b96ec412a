//! Scheduler board for garage work sections.
//!
//! A section queue holds every job assigned to one work discipline. The
//! active/pending split is derived on every read: open jobs are stably
//! sorted by priority, the first `capacity` occupy active slots, and the
//! rest wait with a 1-based rank. Completed jobs stay in the queue as
//! history but never count towards either side.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
