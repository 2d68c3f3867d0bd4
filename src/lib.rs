pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::app::{router, AppState};
pub use crate::core::estimator::{EstimateInput, Estimator, EstimatorSettings};
pub use crate::core::loader::{LoadedTable, TableLoader};
pub use crate::core::table::PriceTable;
pub use crate::utils::error::{LookupError, Result};
