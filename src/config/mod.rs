#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Projection};
use crate::utils::error::Result;
use crate::utils::validation::{validate_data_source, validate_range, validate_socket_addr};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_DATA_SOURCE: &str = "./data/london_housing.csv";
pub const DEFAULT_BIND: &str = "127.0.0.1:8050";
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 30;

/// Checks shared by every configuration front end.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_data_source("data.source", config.data_source())?;
    validate_socket_addr("server.bind", config.bind_addr())?;
    validate_range(
        "data.fetch_timeout_seconds",
        config.fetch_timeout_seconds(),
        1,
        600,
    )?;

    match config.projection() {
        Projection::Multiplier { factor } => {
            validate_range("estimate.projection.factor", factor, 0.01, 100.0)?
        }
        Projection::PercentOffset { percent } => {
            validate_range("estimate.projection.percent", percent, -100.0, 1000.0)?
        }
        Projection::RecordGrowth => {}
    }

    Ok(())
}
