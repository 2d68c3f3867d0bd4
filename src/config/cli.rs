use crate::config::{validate_provider, DEFAULT_BIND, DEFAULT_DATA_SOURCE};
use crate::core::{ConfigProvider, Projection, Variant};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "london-price-lookup")]
#[command(about = "London housing price lookup form and API")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file; replaces the data and server flags")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_DATA_SOURCE, help = "CSV export path or http(s) URL")]
    pub data_source: String,

    #[arg(long, value_enum, default_value_t = Variant::Basic)]
    pub variant: Variant,

    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, help = "Multiply the looked-up value by the submitted area")]
    pub scale_by_area: bool,

    #[arg(long, help = "Fixed five-year multiplier (defaults per variant)")]
    pub multiplier: Option<f64>,

    #[arg(long, default_value = "30")]
    pub fetch_timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn data_source(&self) -> &str {
        &self.data_source
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn scale_by_area(&self) -> bool {
        self.scale_by_area
    }

    fn projection(&self) -> Projection {
        match self.multiplier {
            Some(factor) => Projection::Multiplier { factor },
            None => self.variant.default_projection(),
        }
    }

    fn fetch_timeout_seconds(&self) -> u64 {
        self.fetch_timeout
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["london-price-lookup"]);
        assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
        assert_eq!(config.variant, Variant::Basic);
        assert_eq!(config.projection(), Projection::Multiplier { factor: 2.0 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zoned_with_multiplier() {
        let config = CliConfig::parse_from([
            "london-price-lookup",
            "--variant",
            "zoned",
            "--multiplier",
            "1.9",
            "--scale-by-area",
        ]);
        assert_eq!(config.variant, Variant::Zoned);
        assert!(config.scale_by_area);
        assert_eq!(config.projection(), Projection::Multiplier { factor: 1.9 });
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::parse_from(["london-price-lookup", "--multiplier", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["london-price-lookup", "--bind", "nowhere"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["london-price-lookup", "--data-source", "ftp://x/y.csv"]);
        assert!(config.validate().is_err());
    }
}
