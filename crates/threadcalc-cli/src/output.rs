//! CLI output formatting.

use std::time::Duration;

use serde::Serialize;

use threadcalc_core::task::{CalcError, TaskKind};
use threadcalc_orchestration::interfaces::{CalculationResult, PairReport, SingleReport};

/// Output format for one-shot runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// `fibonacci(10)` / `sum of squares(10)`.
#[must_use]
pub fn result_label(kind: TaskKind, n: u32) -> String {
    format!("{}({n})", kind.display_name().to_lowercase())
}

/// Whole milliseconds, e.g. `57ms`.
#[must_use]
pub fn format_millis(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// User-facing text for a rejected or failed run.
#[must_use]
pub fn describe_error(err: &CalcError) -> String {
    match err {
        CalcError::OutOfRange { min, max, .. } => {
            format!("Number must be between {min} and {max}")
        }
        other => other.to_string(),
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// One worker's result in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonResult {
    pub worker: String,
    pub task: TaskKind,
    pub n: u32,
    pub value: u64,
    pub elapsed_ms: u64,
    pub interruptions: u32,
}

impl From<&CalculationResult> for JsonResult {
    fn from(r: &CalculationResult) -> Self {
        Self {
            worker: r.worker.clone(),
            task: r.kind,
            n: r.n,
            value: r.value,
            elapsed_ms: millis(r.duration),
            interruptions: r.interruptions,
        }
    }
}

/// A whole run in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub mode: &'static str,
    pub n: u32,
    pub results: Vec<JsonResult>,
    pub total_ms: u64,
}

impl From<&SingleReport> for JsonReport {
    fn from(report: &SingleReport) -> Self {
        Self {
            mode: "single",
            n: report.result.n,
            results: vec![JsonResult::from(&report.result)],
            total_ms: millis(report.total),
        }
    }
}

impl From<&PairReport> for JsonReport {
    fn from(report: &PairReport) -> Self {
        Self {
            mode: "pair",
            n: report.fibonacci.n,
            results: report.results().into_iter().map(JsonResult::from).collect(),
            total_ms: millis(report.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: TaskKind, value: u64) -> CalculationResult {
        CalculationResult {
            worker: "worker-1".into(),
            kind,
            n: 10,
            value,
            duration: Duration::from_millis(45),
            interruptions: 0,
        }
    }

    #[test]
    fn labels() {
        assert_eq!(result_label(TaskKind::Fibonacci, 10), "fibonacci(10)");
        assert_eq!(result_label(TaskKind::SumOfSquares, 3), "sum of squares(3)");
    }

    #[test]
    fn format_millis_whole() {
        assert_eq!(format_millis(Duration::from_micros(57_900)), "57ms");
    }

    #[test]
    fn format_duration_ranges() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert_eq!(format_duration(Duration::from_secs(3)), "3.000s");
        assert!(format_duration(Duration::from_secs(90)).starts_with("1m"));
    }

    #[test]
    fn describe_out_of_range() {
        let err = CalcError::OutOfRange {
            n: 0,
            min: 1,
            max: 20,
        };
        assert_eq!(describe_error(&err), "Number must be between 1 and 20");
        assert_eq!(
            describe_error(&CalcError::Spawn("no threads".into())),
            "failed to spawn worker: no threads"
        );
    }

    #[test]
    fn pair_json_shape() {
        let report = PairReport {
            fibonacci: result(TaskKind::Fibonacci, 55),
            sum_of_squares: result(TaskKind::SumOfSquares, 385),
            total: Duration::from_millis(52),
        };
        let json = serde_json::to_value(JsonReport::from(&report)).unwrap();
        assert_eq!(json["mode"], "pair");
        assert_eq!(json["n"], 10);
        assert_eq!(json["total_ms"], 52);
        assert_eq!(json["results"][0]["task"], "fibonacci");
        assert_eq!(json["results"][1]["value"], 385);
        assert_eq!(json["results"][1]["elapsed_ms"], 45);
    }

    #[test]
    fn single_json_shape() {
        let report = SingleReport {
            result: result(TaskKind::SumOfSquares, 385),
            total: Duration::from_millis(50),
        };
        let json = serde_json::to_value(JsonReport::from(&report)).unwrap();
        assert_eq!(json["mode"], "single");
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
        assert_eq!(json["results"][0]["task"], "sum_of_squares");
    }
}
