//! One OS thread running one task to completion.
//!
//! The worker's closure owns its task, its input, its pacer and the sending
//! half of a one-slot result channel. The orchestrator keeps the receiving
//! half and reads it only after `join` returns, so the slot has exactly one
//! writer and the read happens after the write.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};
use tracing::{error, info};

use threadcalc_core::observer::ProgressObserver;
use threadcalc_core::pacing::{InterruptHandle, Pacer, Pacing};
use threadcalc_core::task::{CalcError, Task, TaskContext, TaskKind, TaskOutput};

use crate::interfaces::CalculationResult;

struct SlotValue {
    output: TaskOutput,
    duration: Duration,
}

/// Handle to a running worker thread.
pub struct Worker {
    name: String,
    kind: TaskKind,
    n: u32,
    handle: JoinHandle<()>,
    slot: Receiver<SlotValue>,
    interrupt: InterruptHandle,
}

impl Worker {
    /// Spawn a thread named `worker-<index>` running `task` on `n`.
    pub fn spawn(
        index: usize,
        task: Arc<dyn Task>,
        n: u32,
        pacing: Pacing,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Self, CalcError> {
        let name = format!("worker-{index}");
        let kind = task.kind();
        let (pacer, interrupt) = Pacer::new(pacing);
        let (tx, slot) = bounded(1);

        let thread_name = name.clone();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                let start = Instant::now();
                let ctx = TaskContext::new(&thread_name, &pacer, observer.as_ref());
                let output = task.compute(n, &ctx);
                // Capacity 1 and a single send: never blocks.
                let _ = tx.send(SlotValue {
                    output,
                    duration: start.elapsed(),
                });
            })
            .map_err(|e| CalcError::Spawn(e.to_string()))?;

        info!(worker = %name, task = kind.short_name(), n, "worker spawned");
        Ok(Self {
            name,
            kind,
            n,
            handle,
            slot,
            interrupt,
        })
    }

    /// Name of the worker thread.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cut the worker's current (or next) pause short.
    ///
    /// The task logs the interruption and keeps going. Returns `false` if the
    /// worker has already finished.
    pub fn interrupt(&self) -> bool {
        self.interrupt.interrupt()
    }

    /// Whether the thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the thread exits, then read its result slot.
    pub fn join(self) -> Result<CalculationResult, CalcError> {
        if self.handle.join().is_err() {
            error!(worker = %self.name, "worker panicked");
            return Err(CalcError::WorkerLost(self.name));
        }

        let Ok(value) = self.slot.try_recv() else {
            error!(worker = %self.name, "worker exited with an empty result slot");
            return Err(CalcError::WorkerLost(self.name));
        };

        info!(
            worker = %self.name,
            value = value.output.value,
            elapsed = ?value.duration,
            "worker joined"
        );
        Ok(CalculationResult {
            worker: self.name,
            kind: self.kind,
            n: self.n,
            value: value.output.value,
            duration: value.duration,
            interruptions: value.output.interruptions,
        })
    }
}
