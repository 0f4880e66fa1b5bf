use crate::config::{Config, StorageBackend};
use crate::error::PersistenceError;
use crate::models::snapshot::StoreSnapshot;
use crate::repositories::json_file_repo::JsonFileRepo;

/// Where the store keeps its state between restarts.
pub enum Persistence {
    /// Nothing survives a restart.
    Memory,
    JsonFile(JsonFileRepo),
}

impl Persistence {
    pub fn from_config(config: &Config) -> Self {
        match config.storage {
            StorageBackend::Memory => Persistence::Memory,
            StorageBackend::File => Persistence::JsonFile(JsonFileRepo::new(config.database_file.clone())),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Persistence::Memory => "in-memory".to_string(),
            Persistence::JsonFile(repo) => format!("json file at {}", repo.path().display()),
        }
    }

    pub async fn load(&self) -> Result<Option<StoreSnapshot>, PersistenceError> {
        match self {
            Persistence::Memory => Ok(None),
            Persistence::JsonFile(repo) => repo.load().await,
        }
    }

    pub async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
        match self {
            Persistence::Memory => Ok(()),
            Persistence::JsonFile(repo) => repo.save(snapshot).await,
        }
    }
}
