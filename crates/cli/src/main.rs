use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Diagnostics go to stderr so stdout carries only the interactive dialog.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_logging();
    orderup_cli::run()
}
