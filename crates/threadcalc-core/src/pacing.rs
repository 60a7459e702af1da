//! Per-iteration pacing with interruptible pauses.
//!
//! Each task pauses after every loop iteration so that concurrent workers
//! visibly interleave. A pause waits on the worker's interrupt channel, so an
//! [`InterruptHandle`] can cut it short the way a thread interrupt would.

use std::time::Duration;

use crossbeam_channel::{bounded, never, Receiver, RecvTimeoutError, Sender, TrySendError};

use crate::constants::DEFAULT_STEP_DELAY_MS;

/// Pacing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after each iteration. Zero disables pausing.
    pub step_delay: Duration,
}

impl Pacing {
    #[must_use]
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// Build from a delay in milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// No pauses at all.
    #[must_use]
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(DEFAULT_STEP_DELAY_MS)
    }
}

/// How a pause ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    /// The full delay elapsed.
    Elapsed,
    /// An interrupt arrived before the delay elapsed.
    Interrupted,
}

/// Pauses a worker between iterations.
pub struct Pacer {
    delay: Duration,
    interrupts: Receiver<()>,
}

impl Pacer {
    /// Create a pacer together with the handle that can interrupt it.
    #[must_use]
    pub fn new(pacing: Pacing) -> (Self, InterruptHandle) {
        // A single slot: repeated interrupts before the next pause coalesce.
        let (tx, rx) = bounded(1);
        (
            Self {
                delay: pacing.step_delay,
                interrupts: rx,
            },
            InterruptHandle { sender: tx },
        )
    }

    /// A pacer nobody can interrupt.
    #[must_use]
    pub fn uninterruptible(pacing: Pacing) -> Self {
        Self {
            delay: pacing.step_delay,
            interrupts: never(),
        }
    }

    /// Pause for the configured delay, returning early if interrupted.
    pub fn pause(&self) -> PauseOutcome {
        if self.delay.is_zero() {
            return match self.interrupts.try_recv() {
                Ok(()) => PauseOutcome::Interrupted,
                Err(_) => PauseOutcome::Elapsed,
            };
        }
        match self.interrupts.recv_timeout(self.delay) {
            Ok(()) => PauseOutcome::Interrupted,
            Err(RecvTimeoutError::Timeout) => PauseOutcome::Elapsed,
            Err(RecvTimeoutError::Disconnected) => {
                // Handle dropped: nobody can interrupt any more.
                std::thread::sleep(self.delay);
                PauseOutcome::Elapsed
            }
        }
    }
}

/// Sends interrupts to a [`Pacer`].
#[derive(Clone)]
pub struct InterruptHandle {
    sender: Sender<()>,
}

impl InterruptHandle {
    /// Request that the current or next pause end early.
    ///
    /// Returns `false` if the pacer is gone. Never blocks.
    pub fn interrupt(&self) -> bool {
        match self.sender.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Disconnected(())) => false,
        }
    }
}
