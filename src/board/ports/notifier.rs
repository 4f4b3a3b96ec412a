//! Notification port for the toast/alert layer.

use crate::board::domain::BoardEvent;

/// Fire-and-forget sink for board notifications.
///
/// Delivery failures are the notifier's problem; the board never blocks on
/// or observes them.
pub trait BoardNotifier: Send + Sync {
    /// Delivers one event to the alert layer.
    fn notify(&self, event: &BoardEvent);
}
