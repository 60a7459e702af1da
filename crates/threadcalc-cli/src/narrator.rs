//! Line-by-line narration of a run's threads.
//!
//! `ConsoleNarrator` is both the orchestrator's [`RunReporter`] (main-thread
//! lifecycle lines) and a [`ProgressObserver`] (lines printed from inside
//! each worker).

use std::io;

use threadcalc_core::observer::ProgressObserver;
use threadcalc_core::progress::{ProgressEvent, ProgressUpdate};
use threadcalc_core::task::TaskKind;
use threadcalc_orchestration::interfaces::RunReporter;

use crate::output::result_label;
use crate::term::Console;

/// Prints thread lifecycle and task progress to a [`Console`].
pub struct ConsoleNarrator {
    console: Console,
    verbose: bool,
}

impl ConsoleNarrator {
    /// Create a narrator; `verbose` adds one line per iteration.
    #[must_use]
    pub fn new(console: Console, verbose: bool) -> Self {
        Self { console, verbose }
    }

    fn say(&self, text: &str) {
        // Narration is best-effort; a closed stdout must not kill a worker.
        let _ = self.console.line(text);
    }
}

/// The "computing" banner for a task.
#[must_use]
pub fn computing_label(kind: TaskKind, n: u32) -> String {
    match kind {
        TaskKind::Fibonacci => format!("fib({n})"),
        TaskKind::SumOfSquares => match n {
            0 => "0".to_string(),
            1 => "1²".to_string(),
            2 => "1² + 2²".to_string(),
            _ => format!("1² + 2² + ... + {n}²"),
        },
    }
}

/// Lines printed before a single run creates its worker.
pub fn announce_single(console: &Console, kind: TaskKind) -> io::Result<()> {
    console.line(&format!("\nCreating {kind} calculator thread..."))
}

/// Lines printed before a concurrent pair creates its workers.
pub fn announce_pair(console: &Console) -> io::Result<()> {
    console.line("\nCreating all calculator threads...")?;
    for kind in TaskKind::ALL {
        console.line(&format!("Creating thread for {kind}..."))?;
    }
    console.line("\nStarting both threads concurrently...\n")
}

impl ProgressObserver for ConsoleNarrator {
    fn on_progress(&self, update: &ProgressUpdate) {
        let worker = &update.worker;
        match update.event {
            ProgressEvent::Started => {
                self.say(&format!(
                    "{worker} computing: {}",
                    computing_label(update.task, update.n)
                ));
            }
            ProgressEvent::Step if self.verbose => {
                self.say(&format!(
                    "{worker} step {}/{}",
                    update.step, update.total_steps
                ));
            }
            ProgressEvent::Step => {}
            ProgressEvent::Interrupted => {
                self.say(&format!(
                    "{worker} pause interrupted at step {}, continuing",
                    update.step
                ));
            }
            ProgressEvent::Completed { value } => {
                self.say(&format!(
                    "{worker} completed: {} = {value}",
                    result_label(update.task, update.n)
                ));
            }
        }
    }
}

impl RunReporter for ConsoleNarrator {
    fn worker_started(&self, worker: &str, _kind: TaskKind, n: u32) {
        self.say(&format!("{worker} starting calculation for {n}"));
    }

    fn waiting(&self, workers: usize) {
        if workers == 1 {
            self.say("\nMain thread waiting for calculation to complete...");
        } else {
            self.say("\nMain thread waiting for all calculations to complete...");
        }
    }

    fn worker_finished(&self, worker: &str) {
        self.say(&format!("{worker} has finished execution"));
    }
}
