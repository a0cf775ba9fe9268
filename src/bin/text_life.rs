//! Terminal front end: same driver loop, text console backend.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use life_screen::{
    Config, Error, RunSettings, RunSummary, application,
    rendering::{TextRenderer, terminal_grid},
    telemetry,
};

/// stderr on the same terminal as the frame would draw over it
fn default_log_filter() -> &'static str {
    if termion::is_tty(&std::io::stderr()) { "warn" } else { "info" }
}

fn main() -> ExitCode {
    telemetry::init(default_log_filter());
    let config = Config::parse();
    info!(?config, "simulation parameters");

    match pollster::block_on(run(&config)) {
        Ok(summary) => {
            info!(generations = summary.generations, reason = ?summary.reason, "exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, exit_code = err.exit_code(), "text_life failed");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Grid size comes from the terminal; width, height and cell size only
/// apply to the window front end.
async fn run(config: &Config) -> Result<RunSummary, Error> {
    config.validate()?;
    let (rows, columns) = terminal_grid(termion::terminal_size())?;
    let mut automaton = application::build_automaton(config, rows, columns)?;
    let mut screen = TextRenderer::acquire()?;

    let settings = RunSettings::from_config(config);
    Ok(application::run(&mut screen, &mut automaton, &settings).await?)
}
