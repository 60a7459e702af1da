//! Application configuration from CLI flags and environment.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use threadcalc_cli::output::OutputFormat;
use threadcalc_core::constants::DEFAULT_STEP_DELAY_MS;
use threadcalc_core::pacing::Pacing;

/// How the calculator is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Interactive menu on stdin.
    Menu,
    /// One task on one worker thread.
    Single,
    /// Both tasks on two concurrent worker threads.
    Pair,
}

/// Fibonacci and sum of squares on dedicated worker threads.
#[derive(Parser, Debug)]
#[command(name = "threadcalc", version, about)]
pub struct AppConfig {
    /// Entry mode: interactive menu, single task, or concurrent pair.
    #[arg(long, value_enum, default_value_t = Mode::Menu, env = "THREADCALC_MODE")]
    pub mode: Mode,

    /// Task to run in single mode: fib (fibonacci) or sumsq (sum-of-squares).
    #[arg(short, long, default_value = "fib")]
    pub task: String,

    /// Input count, between 1 and 20.
    #[arg(
        short,
        long,
        default_value = "10",
        env = "THREADCALC_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Pause after each loop iteration, in milliseconds (0 disables).
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS, env = "THREADCALC_STEP_DELAY_MS")]
    pub step_delay_ms: u64,

    /// Output format (single and pair modes only).
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output: per-step lines and info logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode, only output the numbers (single and pair modes only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Draw progress bars instead of narrating each thread (single and pair modes only).
    #[arg(long)]
    pub progress: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        let config = <Self as Parser>::parse();
        if let Some(flag) = config.menu_conflict() {
            Self::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    format!("{flag} cannot be used with the interactive menu"),
                )
                .exit();
        }
        config
    }

    /// First output flag given that the interactive menu cannot honor.
    #[must_use]
    pub fn menu_conflict(&self) -> Option<&'static str> {
        if self.mode != Mode::Menu {
            return None;
        }
        if self.format != OutputFormat::Text {
            Some("--format json")
        } else if self.quiet {
            Some("--quiet")
        } else if self.progress {
            Some("--progress")
        } else {
            None
        }
    }

    /// Pacing for every worker.
    #[must_use]
    pub fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.step_delay_ms)
    }

    /// Default log level before `RUST_LOG` is applied.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }

    /// Whether per-thread narration goes to stdout.
    #[must_use]
    pub fn narrate(&self) -> bool {
        !self.quiet && !self.progress && self.format == OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> AppConfig {
        let argv = std::iter::once("threadcalc").chain(args.iter().copied());
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.mode, Mode::Menu);
        assert_eq!(config.task, "fib");
        assert_eq!(config.menu_conflict(), None);
        assert_eq!(config.pacing().step_delay, Duration::from_millis(5));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.narrate());
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn single_mode_flags() {
        let config = parse(&["--mode", "single", "--task", "sum-of-squares", "-n", "7"]);
        assert_eq!(config.mode, Mode::Single);
        assert_eq!(config.task, "sum-of-squares");
        assert_eq!(config.n, 7);
    }

    #[test]
    fn negative_n_parses_for_validation() {
        assert_eq!(parse(&["-n", "-3"]).n, -3);
    }

    #[test]
    fn quiet_json_and_progress_silence_narration() {
        assert!(!parse(&["-q"]).narrate());
        assert!(!parse(&["--format", "json"]).narrate());
        assert!(!parse(&["--progress"]).narrate());
    }

    #[test]
    fn zero_delay_disables_pacing() {
        assert!(parse(&["--step-delay-ms", "0"]).pacing().step_delay.is_zero());
    }

    #[test]
    fn menu_rejects_run_output_flags() {
        assert_eq!(parse(&["-q"]).menu_conflict(), Some("--quiet"));
        assert_eq!(parse(&["--progress"]).menu_conflict(), Some("--progress"));
        assert_eq!(
            parse(&["--format", "json"]).menu_conflict(),
            Some("--format json")
        );
        assert_eq!(parse(&["--mode", "pair", "-q"]).menu_conflict(), None);
    }

    #[test]
    fn verbose_raises_log_level() {
        assert_eq!(parse(&["-v"]).log_level(), tracing::Level::INFO);
    }
}
