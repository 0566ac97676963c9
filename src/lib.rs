pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{ConsoleSink, MemorySink};
pub use config::Config;
pub use self::core::{ServiceManager, ServiceState, StatusSink};
pub use utils::error::{MiddlewareError, Result};
