use anyhow::Result;
use ducks::{simulation::DuckSimulator, QuackTally};
use log::{debug, info};
use thiserror::Error;

use crate::config::app::AppConfig;

mod config;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] validator::ValidationErrors),
}

fn main() -> Result<()> {
    let app_config = AppConfig::new()?;
    config::log::init(&app_config.log_level)?;
    debug!("Starting simulation with configuration: {:?}", app_config);

    let tally = QuackTally::new();
    let simulator = DuckSimulator::counting(tally, app_config.simulation_settings());
    for run in 1..=app_config.runs {
        let quacks = simulator.run();
        info!("Run {}/{} done, {} quacks so far", run, app_config.runs, quacks);
    }
    Ok(())
}
