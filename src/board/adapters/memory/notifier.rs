//! Recording and no-op adapters for the notification boundaries.
//!
//! The recording variants capture events in emission order; UI layers that
//! poll and test code both read them back through `events`.

use std::sync::{Arc, Mutex};

use crate::board::{
    domain::{BoardEvent, CompletionEvent},
    ports::{BoardNotifier, CompletionSink},
};

/// Notifier that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBoardNotifier;

impl BoardNotifier for NullBoardNotifier {
    fn notify(&self, _event: &BoardEvent) {}
}

/// Notifier that retains every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingBoardNotifier {
    events: Arc<Mutex<Vec<BoardEvent>>>,
}

impl RecordingBoardNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns captured events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl BoardNotifier for RecordingBoardNotifier {
    fn notify(&self, event: &BoardEvent) {
        // Fire-and-forget: a poisoned lock drops the event.
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Completion sink that retains every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingCompletionSink {
    events: Arc<Mutex<Vec<CompletionEvent>>>,
}

impl RecordingCompletionSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns captured completion events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<CompletionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl CompletionSink for RecordingCompletionSink {
    fn accept(&self, event: &CompletionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
