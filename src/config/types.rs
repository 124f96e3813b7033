use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogConfig;
use crate::qa::AnswerDefaults;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LogConfig,

    /// Dataset source
    pub data: DataConfig,

    /// Parameter defaults for answers
    pub answers: AnswerDefaults,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for `serve`
    pub bind_addr: String,

    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            cors_permissive: true,
        }
    }
}

/// Where the dataset comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON dataset file; the built-in seed is used when unset
    pub seed_file: Option<PathBuf>,
}
