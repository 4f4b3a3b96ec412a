//! Application services orchestrating the scheduler board.

mod board;

pub use board::{BoardError, BoardResult, CheckInRequest, SchedulerBoard};
