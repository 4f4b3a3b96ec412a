//! Camshaft: garage work-scheduling board.
//!
//! Camshaft models the dispatch board of a repair shop: priority-ordered
//! queues of repair jobs across work sections (electrical, painting,
//! detailing, mechanical, body work), each with a small number of concurrent
//! work slots. The board tracks which jobs are actively worked on and which
//! are waiting, moves jobs between sections, records test drives, and emits
//! completion events for downstream reporting.
//!
//! # Architecture
//!
//! Camshaft follows hexagonal architecture principles:
//!
//! - **Domain**: pure scheduling logic with no infrastructure dependencies
//! - **Ports**: abstract trait interfaces for persistence and notification
//! - **Adapters**: concrete implementations of ports (in-memory, JSON store)
//!
//! # Modules
//!
//! - [`board`]: the scheduler board and its section queues

pub mod board;
