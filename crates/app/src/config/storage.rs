//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Persistence backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Relational store in a single `SQLite` file.
    Sqlite,

    /// One JSON document per collection in a data directory.
    Json,
}

/// Storage settings.
#[derive(Debug, Clone, Args)]
pub struct StorageConfig {
    /// Storage backend (sqlite, json)
    #[arg(
        long,
        env = "HOSTEL_BACKEND",
        value_enum,
        default_value_t = Backend::Sqlite,
        global = true
    )]
    pub backend: Backend,

    /// `SQLite` connection string, used by the `sqlite` backend
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://data/hostel.db",
        hide_env_values = true,
        global = true
    )]
    pub database_url: String,

    /// Directory holding the JSON collections, used by the json backend
    #[arg(long, env = "HOSTEL_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,
}
