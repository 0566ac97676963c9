use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiddlewareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Initialization failed: {message}")]
    InitializationFailed { message: String },
}

impl MiddlewareError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("System I/O failure: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InitializationFailed { message } => {
                format!("Service could not be initialized: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that stdout is writable and retry",
            Self::ConfigError { .. } => "Check the config file path and its TOML syntax",
            Self::InitializationFailed { .. } => "Re-run with --verbose for details",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InitializationFailed { .. } => 1,
            Self::ConfigError { .. } => 2,
            Self::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MiddlewareError>;
