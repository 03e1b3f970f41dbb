pub mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use orderup_core::Catalog;

use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "orderup",
    about = "Interactive food ordering console",
    long_about = "Build a food order from the fixed menu and print the total. \
                  Type an item name and quantity per line (e.g. 'Burger 2'), \
                  'menu' to reprint the menu, or 'done' to finish."
)]
pub struct Cli {}

/// Runs the interactive session over stdin/stdout. Always exits with success:
/// malformed input is recovered inside the loop, and a dead terminal leaves
/// nothing useful to signal.
pub fn run() -> ExitCode {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Catalog::builtin(), stdin.lock(), stdout.lock());
    if let Err(error) = session.run() {
        tracing::warn!(error = %error, "session ended on a terminal I/O failure");
    }
    ExitCode::SUCCESS
}
