//! Concrete observer implementations.

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::observer::ProgressObserver;
use crate::progress::{ProgressEvent, ProgressUpdate};

/// Observer that forwards updates through a channel (non-blocking).
///
/// Updates are dropped when the channel is full or closed; the final
/// `Completed` update is the one a consumer should rely on.
pub struct ChannelObserver {
    sender: Sender<ProgressUpdate>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self { sender }
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        let _ = self.sender.try_send(update.clone());
    }
}

/// Observer that logs progress updates through `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        match update.event {
            ProgressEvent::Started => info!(
                worker = %update.worker,
                task = update.task.short_name(),
                n = update.n,
                "task started"
            ),
            ProgressEvent::Step => debug!(
                worker = %update.worker,
                task = update.task.short_name(),
                progress = format!("{:.1}%", update.fraction() * 100.0),
                step = update.step,
                total = update.total_steps,
                "progress update"
            ),
            ProgressEvent::Interrupted => debug!(
                worker = %update.worker,
                step = update.step,
                "pause cut short"
            ),
            ProgressEvent::Completed { value } => info!(
                worker = %update.worker,
                task = update.task.short_name(),
                n = update.n,
                value,
                "task complete"
            ),
        }
    }
}

/// Null object pattern; does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

/// Observer that keeps every update it receives, in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the updates received so far.
    #[must_use]
    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().clone()
    }

    /// Number of updates received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.lock().is_empty()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.updates.lock().push(update.clone());
    }
}
