//! Application configuration module

use clap::Args;

use crate::config::{logging::LoggingConfig, storage::StorageConfig};

pub mod logging;
pub mod storage;

pub use logging::LogFormat;
pub use storage::Backend;

/// Settings shared by every command, read from flags, the environment or a
/// `.env` file.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Persistence settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Load `.env` from the working directory if present.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
