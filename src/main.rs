use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};

use life_screen::{
    Config, Error, RunSettings, RunSummary, application,
    rendering::{GraphicsRenderer, SurfaceLayout},
    telemetry,
};

fn window_conf() -> Conf {
    let config = Config::parse();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init("info");
    let config = Config::parse();
    info!(?config, "simulation parameters");

    let code = match run(&config).await {
        Ok(summary) => {
            info!(generations = summary.generations, reason = ?summary.reason, "exiting");
            0
        }
        Err(err) => {
            error!(error = %err, exit_code = err.exit_code(), "life_screen failed");
            err.exit_code()
        }
    };
    // The renderer is gone by now; exit with the status the run produced.
    std::process::exit(code);
}

async fn run(config: &Config) -> Result<RunSummary, Error> {
    config.validate()?;
    let (rows, columns) = config.grid_dimensions();
    let layout = SurfaceLayout::new(config.width, config.height, config.cell_size, rows, columns)?;
    let mut screen = GraphicsRenderer::acquire(layout)?;
    let mut automaton = application::build_automaton(config, layout.rows, layout.columns)?;

    let settings = RunSettings::from_config(config);
    Ok(application::run(&mut screen, &mut automaton, &settings).await?)
}
