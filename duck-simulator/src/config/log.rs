use env_logger::Env;
use log::SetLoggerError;

/// Installs the global logger; `RUST_LOG` overrides `default_level`.
pub fn init(default_level: &str) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .try_init()
}
