//! Shell completion scripts for the `threadcalc` binary.

use std::io::{self, Write};

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` and flush it.
///
/// The script always completes the `threadcalc` binary, whatever name the
/// command was built with.
pub fn write_completion(
    cmd: &mut Command,
    shell: Shell,
    out: &mut dyn Write,
) -> io::Result<()> {
    generate(shell, cmd, "threadcalc", out);
    out.flush()
}
