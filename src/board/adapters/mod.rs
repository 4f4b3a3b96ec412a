//! Adapter implementations of the board ports.

pub mod json_store;
pub mod memory;
pub mod report;
