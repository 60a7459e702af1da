//! CLI result presenter.

use threadcalc_orchestration::interfaces::{
    CalculationResult, PairReport, ResultPresenter, SingleReport,
};

use crate::output::{
    format_duration, format_millis, result_label, JsonReport, OutputFormat,
};
use crate::term::Console;
use crate::ui::{header, print_error, success};

/// CLI result presenter.
pub struct CLIResultPresenter {
    console: Console,
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(console: Console, format: OutputFormat, verbose: bool, quiet: bool) -> Self {
        Self {
            console,
            format,
            verbose,
            quiet,
        }
    }

    fn emit(&self, text: &str) {
        if let Err(e) = self.console.line(text) {
            tracing::warn!(error = %e, "failed to write result");
        }
    }

    fn emit_json(&self, report: &JsonReport) {
        match serde_json::to_string_pretty(report) {
            Ok(json) => self.emit(&json),
            Err(e) => print_error(&format!("failed to encode result: {e}")),
        }
    }

    fn emit_worker_detail(&self, result: &CalculationResult) {
        if self.verbose {
            self.emit(&format!(
                "  {}: {} in worker, {} interrupted pause(s)",
                result.worker,
                format_duration(result.duration),
                result.interruptions
            ));
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_single(&self, report: &SingleReport) {
        let result = &report.result;
        if self.format == OutputFormat::Json {
            self.emit_json(&JsonReport::from(report));
            return;
        }
        if self.quiet {
            self.emit(&result.value.to_string());
            return;
        }

        self.emit(&format!(
            "\nResult: {} = {}",
            result_label(result.kind, result.n),
            result.value
        ));
        self.emit_worker_detail(result);
        self.emit(&format!("Execution time: {}", format_millis(report.total)));
    }

    fn present_pair(&self, report: &PairReport) {
        if self.format == OutputFormat::Json {
            self.emit_json(&JsonReport::from(report));
            return;
        }
        if self.quiet {
            for result in report.results() {
                self.emit(&result.value.to_string());
            }
            return;
        }

        let color = self.console.color();
        self.emit(&format!("\n{}", header("Results", color)));
        for result in report.results() {
            self.emit(&format!(
                "{}({}) = {}",
                result.kind.display_name(),
                result.n,
                result.value
            ));
            self.emit_worker_detail(result);
        }
        self.emit(&format!(
            "\nTotal execution time: {}",
            format_millis(report.total)
        ));
        self.emit(&success("All calculations completed successfully!", color));
    }

    fn present_error(&self, error: &str) {
        self.emit(error);
    }
}
