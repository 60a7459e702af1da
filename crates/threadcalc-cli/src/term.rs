//! Shared console handle.
//!
//! The menu, the presenter and the narration observer all write through one
//! `Console`. Worker threads narrate concurrently, so every line is written
//! and flushed under a single lock to keep lines whole.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::is_color_disabled;

/// Line-oriented, thread-safe output sink.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Console {
    /// Console writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        let color = !is_color_disabled() && console::colors_enabled();
        Self::new(Box::new(io::stdout()), color)
    }

    /// Console writing to an arbitrary sink.
    #[must_use]
    pub fn new(out: Box<dyn Write + Send>, color: bool) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            color,
        }
    }

    /// Console writing into memory, without color.
    #[must_use]
    pub fn capture() -> (Self, CapturedOutput) {
        let buffer = CapturedOutput::default();
        (Self::new(Box::new(buffer.clone()), false), buffer)
    }

    /// Whether styled output is enabled.
    #[must_use]
    pub fn color(&self) -> bool {
        self.color
    }

    /// Write a full line.
    pub fn line(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Write text without a trailing newline, e.g. an input prompt.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        write!(out, "{text}")?;
        out.flush()
    }
}

/// In-memory sink filled by a captured [`Console`].
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
