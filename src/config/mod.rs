//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the domain core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the file-backed store keeps its JSON blobs in.
    pub data_dir: PathBuf,
    /// Whether deleting equipment also deletes its maintenance requests.
    pub cascade_delete: bool,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        // A missing .env file is fine; the defaults below cover it.
        dotenvy::dotenv().ok();

        let data_dir = env::var("GEARGUARD_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let cascade_delete = env::var("GEARGUARD_CASCADE_DELETE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            data_dir,
            cascade_delete,
        }
    }
}
