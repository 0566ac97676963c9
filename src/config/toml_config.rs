use super::Config;
use crate::utils::error::{MiddlewareError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// On-disk layout:
///
/// ```toml
/// [service]
/// name = "Auth"
/// port = 8080
/// enable_logging = true
/// ```
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    service: Option<ServiceSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceSection {
    name: Option<String>,
    port: Option<i32>,
    enable_logging: Option<bool>,
}

impl ServiceSection {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            service_name: self.name.unwrap_or(defaults.service_name),
            port: self.port.unwrap_or(defaults.port),
            enable_logging: self.enable_logging.unwrap_or(defaults.enable_logging),
        }
    }
}

/// 從 TOML 檔案載入配置
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        MiddlewareError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    Config::from_toml_str(&content)
}

impl Config {
    /// Parses the `[service]` table. Keys that are absent keep their
    /// `Config::default()` value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        let file: ConfigFile = toml::from_str(&processed)
            .map_err(|e| MiddlewareError::config(format!("TOML parsing error: {}", e)))?;

        let config = file.service.unwrap_or_default().into_config();
        tracing::debug!(
            service = %config.service_name,
            port = config.port,
            enable_logging = config.enable_logging,
            "Parsed service configuration"
        );
        Ok(config)
    }
}

/// 替換環境變數 (例如 ${SERVICE_PORT})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}")
        .map_err(|e| MiddlewareError::config(format!("env pattern: {}", e)))?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}
