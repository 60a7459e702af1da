//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use threadcalc_cli::output::OutputFormat;
use threadcalc_cli::narrator::{announce_pair, announce_single};
use threadcalc_cli::progress::ProgressBars;
use threadcalc_cli::{CLIResultPresenter, Console, ConsoleNarrator, Menu};
use threadcalc_core::observer::ProgressSubject;
use threadcalc_core::observers::LoggingObserver;
use threadcalc_core::registry::{DefaultTaskFactory, TaskFactory};
use threadcalc_orchestration::interfaces::{
    NullRunReporter, PairReport, ResultPresenter, RunReporter, SingleReport,
};
use threadcalc_orchestration::Orchestrator;

use crate::config::{AppConfig, Mode};

enum RunReport {
    Single(SingleReport),
    Pair(PairReport),
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        threadcalc_cli::completion::write_completion(&mut cmd, shell, &mut io::stdout())?;
        return Ok(());
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?config.mode,
        "threadcalc starting"
    );
    match config.mode {
        Mode::Menu => run_menu(config),
        Mode::Single | Mode::Pair => run_once(config),
    }
}

/// Observers shared by every worker.
fn subject() -> ProgressSubject {
    let subject = ProgressSubject::new();
    subject.register(Arc::new(LoggingObserver::new()));
    subject
}

fn run_menu(config: &AppConfig) -> Result<()> {
    let console = Console::stdout();
    let narrator = Arc::new(ConsoleNarrator::new(console.clone(), config.verbose));
    let observers = subject();
    observers.register(narrator.clone());

    let orchestrator = Orchestrator::new(config.pacing(), Arc::new(observers));
    let presenter =
        CLIResultPresenter::new(console.clone(), OutputFormat::Text, config.verbose, false);

    let stdin = io::stdin();
    Menu::new(
        stdin.lock(),
        console,
        &orchestrator,
        &*narrator,
        &presenter,
    )
    .run()?;
    Ok(())
}

fn run_once(config: &AppConfig) -> Result<()> {
    let factory = Arc::new(DefaultTaskFactory::new());
    // Resolve the task name before any output or thread exists
    let single = match config.mode {
        Mode::Single => Some(factory.get_by_name(&config.task)?.kind()),
        _ => None,
    };

    let console = Console::stdout();
    let narrate = config.narrate();
    let narrator = Arc::new(ConsoleNarrator::new(console.clone(), config.verbose));
    let observers = subject();
    if narrate {
        observers.register(narrator.clone());
    }
    let bars = if config.progress {
        let (observer, bars) = ProgressBars::start();
        observers.register(observer);
        Some(bars)
    } else {
        None
    };

    let reporter: &dyn RunReporter = if narrate {
        &*narrator
    } else {
        &NullRunReporter
    };
    debug!(observers = observers.count(), "progress observers registered");
    let orchestrator =
        Orchestrator::with_factory(factory, config.pacing(), Arc::new(observers));

    let report = if let Some(kind) = single {
        if narrate {
            announce_single(&console, kind)?;
        }
        orchestrator
            .run_single(config.n, kind, reporter)
            .map(RunReport::Single)
    } else {
        if narrate {
            announce_pair(&console)?;
        }
        orchestrator.run_pair(config.n, reporter).map(RunReport::Pair)
    };

    // Bars must stop drawing before results are printed
    if let Some(bars) = bars {
        bars.finish();
    }

    let presenter =
        CLIResultPresenter::new(console, config.format, config.verbose, config.quiet);
    match report? {
        RunReport::Single(report) => presenter.present_single(&report),
        RunReport::Pair(report) => presenter.present_pair(&report),
    }
    Ok(())
}
