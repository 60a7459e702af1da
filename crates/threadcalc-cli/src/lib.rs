//! # threadcalc-cli
//!
//! Interactive menu, console narration, result presentation, progress bars,
//! and shell completion.

pub mod completion;
pub mod menu;
pub mod narrator;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod term;
pub mod ui;

pub use menu::Menu;
pub use narrator::ConsoleNarrator;
pub use presenter::CLIResultPresenter;
pub use term::Console;
