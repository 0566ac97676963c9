#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

/// Settings for one middleware service. Treated as a plain snapshot: nothing
/// here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_name: String,
    pub port: i32,
    pub enable_logging: bool,
}

impl Config {
    pub fn new(service_name: impl Into<String>, port: i32, enable_logging: bool) -> Self {
        Self {
            service_name: service_name.into(),
            port,
            enable_logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "middleware".to_string(),
            port: 8080,
            enable_logging: true,
        }
    }
}
