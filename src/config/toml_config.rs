use crate::config::{validate_provider, DEFAULT_BIND, DEFAULT_FETCH_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, Projection, Variant};
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub data: DataConfig,
    pub estimate: Option<EstimateConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub source: Option<String>,
    pub variant: Option<Variant>,
    pub fetch_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfig {
    pub scale_by_area: Option<bool>,
    pub projection: Option<Projection>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRICE_TABLE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    fn estimate_section(&self) -> Option<&EstimateConfig> {
        self.estimate.as_ref()
    }
}

impl ConfigProvider for TomlConfig {
    fn data_source(&self) -> &str {
        self.data.source.as_deref().unwrap_or("")
    }

    fn variant(&self) -> Variant {
        self.data.variant.unwrap_or_default()
    }

    fn bind_addr(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind.as_deref())
            .unwrap_or(DEFAULT_BIND)
    }

    fn scale_by_area(&self) -> bool {
        self.estimate_section()
            .and_then(|e| e.scale_by_area)
            .unwrap_or(false)
    }

    fn projection(&self) -> Projection {
        self.estimate_section()
            .and_then(|e| e.projection)
            .unwrap_or_else(|| self.variant().default_projection())
    }

    fn fetch_timeout_seconds(&self) -> u64 {
        self.data
            .fetch_timeout_seconds
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("data.source", &self.data.source)?;
        if self.data_source().contains("${") {
            return Err(LookupError::ConfigError {
                message: format!(
                    "data.source references an unset environment variable: {}",
                    self.data_source()
                ),
            });
        }
        validate_provider(self)
    }
}
