//! GearGuard Maintenance Core
//!
//! Domain engine for a facility maintenance dashboard: equipment, teams, and
//! maintenance tickets held in memory and mirrored to a local key-value
//! store as named JSON blobs.

pub mod config;
pub mod errors;
pub mod models;
pub mod policy;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;

use std::sync::Arc;

pub use config::Config;
pub use errors::AppError;
pub use session::Session;
pub use storage::{FileStore, MemoryStore, StorageAdapter};
pub use store::AppStore;

/// Application state shared by every screen: the domain store, the sign-in
/// session, and the configuration both were opened with.
pub struct App {
    pub store: AppStore,
    pub session: Session,
    pub config: Config,
}

impl App {
    /// Open the domain store and the session over one shared adapter.
    pub fn open(adapter: Arc<dyn StorageAdapter>, config: Config) -> Result<Self, AppError> {
        let store = AppStore::open(Arc::clone(&adapter), &config)?;
        let session = Session::open(adapter)?;
        Ok(App {
            store,
            session,
            config,
        })
    }

    /// Open against the file store named by the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::from_env();
        let adapter: Arc<dyn StorageAdapter> = Arc::new(FileStore::open(&config.data_dir)?);
        Self::open(adapter, config)
    }
}
