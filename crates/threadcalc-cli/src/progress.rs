//! Progress bars for one-shot runs.
//!
//! Workers report through a [`ChannelObserver`]; a render thread owns the
//! indicatif bars, so drawing never happens on a worker thread.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use threadcalc_core::observers::ChannelObserver;
use threadcalc_core::progress::{ProgressEvent, ProgressUpdate};

use crate::narrator::computing_label;
use crate::output::result_label;

const BAR_TEMPLATE: &str = "{prefix:>10} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// One bar per worker, keyed by worker name.
struct BarSet {
    multi: MultiProgress,
    bars: HashMap<String, ProgressBar>,
    style: ProgressStyle,
}

impl BarSet {
    fn new(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            bars: HashMap::new(),
            style: ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        }
    }

    fn apply(&mut self, update: &ProgressUpdate) {
        if update.event == ProgressEvent::Started {
            let bar = self
                .multi
                .add(ProgressBar::new(u64::from(update.total_steps)));
            bar.set_style(self.style.clone());
            bar.set_prefix(update.worker.clone());
            bar.set_message(computing_label(update.task, update.n));
            self.bars.insert(update.worker.clone(), bar);
            return;
        }

        let Some(bar) = self.bars.get(&update.worker) else {
            return;
        };
        match update.event {
            ProgressEvent::Started => {}
            ProgressEvent::Step => bar.set_position(u64::from(update.step)),
            ProgressEvent::Interrupted => {
                bar.set_message(format!("interrupted at step {}", update.step));
            }
            ProgressEvent::Completed { value } => {
                bar.set_position(u64::from(update.total_steps));
                bar.finish_with_message(format!(
                    "{} = {value}",
                    result_label(update.task, update.n)
                ));
            }
        }
    }

    fn close(&self) {
        for bar in self.bars.values() {
            if !bar.is_finished() {
                bar.abandon();
            }
        }
    }
}

/// Handle to the progress render thread.
pub struct ProgressBars {
    done: Option<Sender<()>>,
    render: Option<JoinHandle<()>>,
}

impl ProgressBars {
    /// Start rendering to stderr.
    #[must_use]
    pub fn start() -> (Arc<ChannelObserver>, Self) {
        Self::start_with_target(ProgressDrawTarget::stderr())
    }

    /// Start rendering to the given target.
    #[must_use]
    pub fn start_with_target(target: ProgressDrawTarget) -> (Arc<ChannelObserver>, Self) {
        let (tx, updates) = unbounded();
        let (done, done_rx) = unbounded::<()>();
        let handle =
            thread::spawn(move || render(BarSet::new(target), &updates, &done_rx));
        (
            Arc::new(ChannelObserver::new(tx)),
            Self {
                done: Some(done),
                render: Some(handle),
            },
        )
    }

    /// Drain pending updates and stop the render thread.
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        drop(self.done.take());
        if let Some(render) = self.render.take() {
            let _ = render.join();
        }
    }
}

impl Drop for ProgressBars {
    fn drop(&mut self) {
        self.stop();
    }
}

fn render(mut bars: BarSet, updates: &Receiver<ProgressUpdate>, done: &Receiver<()>) {
    loop {
        select! {
            recv(updates) -> msg => match msg {
                Ok(update) => bars.apply(&update),
                Err(_) => break,
            },
            recv(done) -> _ => {
                for update in updates.try_iter() {
                    bars.apply(&update);
                }
                break;
            }
        }
    }
    bars.close();
}
