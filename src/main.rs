//! CLI entry point for the collage grid layout optimizer

use clap::Parser;
use collagrid::io::cli::{Cli, CommandRunner};
use collagrid::io::logger::StderrLogger;

fn main() -> collagrid::Result<()> {
    let cli = Cli::parse();
    // Only fails when a logger is already installed
    let _ = StderrLogger::new(cli.log_level()).init();

    let runner = CommandRunner::new(cli)?;
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())
}
