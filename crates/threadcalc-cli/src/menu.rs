//! Interactive menu: single demo, concurrent demo, exit.
//!
//! Input is read as whitespace-separated integers, so several answers may be
//! typed on one line. End of input behaves like choosing "Exit".

use std::collections::VecDeque;
use std::io::{self, BufRead};

use threadcalc_core::constants::{MAX_N, MIN_N};
use threadcalc_core::request::validate_n;
use threadcalc_core::task::TaskKind;
use threadcalc_orchestration::interfaces::{ResultPresenter, RunReporter};
use threadcalc_orchestration::Orchestrator;

use crate::narrator::{announce_pair, announce_single};
use crate::output::describe_error;
use crate::term::Console;
use crate::ui::header;

/// One answer read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A whole number.
    Number(i64),
    /// A token that is not a whole number.
    Invalid(String),
    /// Input is exhausted.
    Eof,
}

/// Splits buffered input into whitespace-separated tokens.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Read the next integer token.
    ///
    /// A bad token also discards the rest of its line.
    pub fn next_int(&mut self) -> io::Result<Input> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(match token.parse() {
                    Ok(n) => Input::Number(n),
                    Err(_) => {
                        self.pending.clear();
                        Input::Invalid(token)
                    }
                });
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Input::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The interactive calculator menu.
pub struct Menu<'a, R> {
    input: TokenReader<R>,
    console: Console,
    orchestrator: &'a Orchestrator,
    reporter: &'a dyn RunReporter,
    presenter: &'a dyn ResultPresenter,
}

impl<'a, R: BufRead> Menu<'a, R> {
    #[must_use]
    pub fn new(
        input: R,
        console: Console,
        orchestrator: &'a Orchestrator,
        reporter: &'a dyn RunReporter,
        presenter: &'a dyn ResultPresenter,
    ) -> Self {
        Self {
            input: TokenReader::new(input),
            console,
            orchestrator,
            reporter,
            presenter,
        }
    }

    /// Loop until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let color = self.console.color();
            self.console
                .line(&format!("\n{}", header("Threaded Math Calculator", color)))?;
            self.console.line("1. Single calculation demo")?;
            self.console.line("2. Multiple concurrent calculations")?;
            self.console.line("3. Exit")?;

            let flow = match self.ask("\nEnter your choice: ")? {
                Input::Number(1) => self.single_demo()?,
                Input::Number(2) => self.pair_demo()?,
                Input::Number(3) => Flow::Quit,
                Input::Number(_) => {
                    self.console.line("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
                Input::Invalid(_) => Flow::Continue,
                Input::Eof => Flow::Quit,
            };

            if let Flow::Quit = flow {
                self.console.line("Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Input> {
        self.console.prompt(prompt)?;
        let input = self.input.next_int()?;
        match &input {
            Input::Invalid(token) => {
                self.console
                    .line(&format!("'{token}' is not a whole number"))?;
            }
            // finish the prompt's line
            Input::Eof => self.console.line("")?,
            Input::Number(_) => {}
        }
        Ok(input)
    }

    /// Ask for `n`; `Err` says where to go when no valid `n` was given.
    fn ask_n(&mut self) -> io::Result<Result<i64, Flow>> {
        Ok(
            match self.ask(&format!("Enter a number ({MIN_N}-{MAX_N}): "))? {
                Input::Number(n) => match validate_n(n) {
                    Ok(_) => Ok(n),
                    Err(e) => {
                        self.presenter.present_error(&describe_error(&e));
                        Err(Flow::Continue)
                    }
                },
                Input::Invalid(_) => Err(Flow::Continue),
                Input::Eof => Err(Flow::Quit),
            },
        )
    }

    fn single_demo(&mut self) -> io::Result<Flow> {
        let color = self.console.color();
        self.console
            .line(&format!("\n{}", header("Single Calculation Demo", color)))?;
        self.console.line("1. Fibonacci")?;
        self.console.line("2. Sum of Squares")?;

        let selector = match self.ask("\nChoose calculator: ")? {
            Input::Number(s) => s,
            Input::Invalid(_) => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };
        let n = match self.ask_n()? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        let Some(kind) = TaskKind::from_selector(selector) else {
            self.console.line("Invalid calculator choice")?;
            return Ok(Flow::Continue);
        };

        announce_single(&self.console, kind)?;
        match self.orchestrator.run_single(n, kind, self.reporter) {
            Ok(report) => self.presenter.present_single(&report),
            Err(e) => self.presenter.present_error(&describe_error(&e)),
        }
        Ok(Flow::Continue)
    }

    fn pair_demo(&mut self) -> io::Result<Flow> {
        let color = self.console.color();
        self.console.line(&format!(
            "\n{}",
            header("Multiple Concurrent Calculations", color)
        ))?;
        let n = match self.ask_n()? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };

        announce_pair(&self.console)?;
        match self.orchestrator.run_pair(n, self.reporter) {
            Ok(report) => self.presenter.present_pair(&report),
            Err(e) => self.presenter.present_error(&describe_error(&e)),
        }
        Ok(Flow::Continue)
    }
}
