use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::error::PersistenceError;
use crate::models::snapshot::StoreSnapshot;

/// Keeps the whole store in one pretty-printed JSON document.
pub struct JsonFileRepo {
    path: PathBuf,
}

impl JsonFileRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<StoreSnapshot>, PersistenceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No database file at {}, starting fresh", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Writes to a sibling temp file first so a crash never leaves a
    /// half-written database behind.
    pub async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
        let contents = serde_json::to_vec_pretty(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, contents)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self.path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "database.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use crate::models::suggestion::Suggestion;

    fn sample_snapshot() -> StoreSnapshot {
        let mut snapshot = StoreSnapshot::default();
        snapshot.suggestions.push(Suggestion {
            id: 5,
            place_name: "Omnia Nightclub".to_string(),
            category: "bar".to_string(),
            description: "Terrace over the Strip".to_string(),
            your_name: "Night Owl".to_string(),
            timestamp: "10/18/2026".to_string(),
            votes: 1,
        });
        snapshot.user_votes.record("user1", 5);
        snapshot
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepo::new(dir.path().join("database.json"));

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saves_and_reloads_snapshot() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepo::new(dir.path().join("nested").join("database.json"));
        let snapshot = sample_snapshot();

        repo.save(&snapshot).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(snapshot));
        assert!(!repo.tmp_path().exists());
    }

    #[tokio::test]
    async fn writes_the_camel_case_layout() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepo::new(dir.path().join("database.json"));
        repo.save(&sample_snapshot()).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["suggestions"][0]["placeName"], "Omnia Nightclub");
        assert_eq!(value["userVotes"]["user1"], serde_json::json!([5]));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepo::new(path).load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Serde(_)));
    }
}
