use super::{toml_config, Config};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sample-middleware")]
#[command(about = "Sample middleware service: initialize, run once, stop")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the service name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the service port
    #[arg(long, allow_negative_numbers = true)]
    pub port: Option<i32>,

    /// Disable diagnostic logging
    #[arg(long)]
    pub no_logging: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Builds the effective config: CLI flags over the file over defaults.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => toml_config::load_config(path)?,
            None => Config::default(),
        };

        if let Some(name) = &self.name {
            config.service_name = name.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.no_logging {
            config.enable_logging = false;
        }

        Ok(config)
    }
}
