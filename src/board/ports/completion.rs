//! Completion boundary for downstream consumers.
//!
//! The board's responsibility ends at emitting the completion event; cost
//! computation, customer notification, and report generation live behind
//! this port.

use crate::board::domain::CompletionEvent;

/// Consumer of completion events.
pub trait CompletionSink: Send + Sync {
    /// Accepts one completion event. Fire-and-forget.
    fn accept(&self, event: &CompletionEvent);
}
