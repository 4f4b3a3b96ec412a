//! Unit tests for the scheduler board.

mod status_transition_tests;
mod test_drive_tests;
