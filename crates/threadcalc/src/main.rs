//! threadcalc: Fibonacci and sum of squares on dedicated worker threads.

use threadcalc_lib::{app, config, errors};

fn main() {
    // Parse CLI args first so --verbose can raise the log level
    let config = config::AppConfig::parse();

    // Initialize tracing; stdout is reserved for program output.
    // RUST_LOG wins over the level picked from the flags.
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        threadcalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
