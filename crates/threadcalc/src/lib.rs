//! threadcalc library: application logic for the threaded calculator.

pub mod app;
pub mod config;
pub mod errors;
