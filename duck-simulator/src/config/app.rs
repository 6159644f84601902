use config::{Config, Environment, File, FileFormat};
use ducks::simulation::SimulationSettings;
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub log_level: String,
    #[validate(range(min = 1, max = 1000))]
    pub runs: u32,
    #[validate(range(min = 1, max = 1000))]
    pub mallard_count: usize,
    pub include_goose: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn simulation_settings(&self) -> SimulationSettings {
        SimulationSettings {
            mallard_count: self.mallard_count,
            include_goose: self.include_goose,
        }
    }
}
