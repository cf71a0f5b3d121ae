// Local storage module using sled embedded database

use anyhow::{Context, Result};
use fitness_coach::{CoachError, KeyValueStore};
use sled::{Db, Tree};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Environment variable that overrides the database location
pub const DB_PATH_ENV: &str = "FITNESS_COACH_DB_PATH";

const STATE_TREE: &str = "coach_state";

/// Key-value storage for the coach state backed by a sled tree
pub struct SledStore {
    db: Db,
    tree: Tree,
}

impl SledStore {
    /// Resolve the database directory: env override, then config, then
    /// ~/.fitness-coach/state
    pub fn db_path(config: &Config) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        if let Some(path) = &config.storage.path {
            return Ok(path.clone());
        }

        Ok(Config::config_dir()?.join("state"))
    }

    /// Open the database at the configured location
    pub fn init(config: &Config) -> Result<Self> {
        Self::open(&Self::db_path(config)?)
    }

    /// Open the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening sled database at {:?}", path);

        let db = sled::open(path).context("Failed to open sled database")?;
        let tree = db
            .open_tree(STATE_TREE)
            .context("Failed to open state tree")?;

        Ok(Self { db, tree })
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn flush(&self) -> fitness_coach::Result<()> {
        self.db.flush().map_err(storage_error)?;
        Ok(())
    }
}

fn storage_error(e: impl std::fmt::Display) -> CoachError {
    CoachError::Storage(e.to_string())
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> fitness_coach::Result<Option<String>> {
        let Some(value) = self.tree.get(key.as_bytes()).map_err(storage_error)? else {
            return Ok(None);
        };

        let value = String::from_utf8(value.to_vec()).map_err(storage_error)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> fitness_coach::Result<()> {
        self.tree
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(storage_error)?;
        self.flush()?;

        tracing::debug!("Saved key {}", key);
        Ok(())
    }

    fn clear(&mut self) -> fitness_coach::Result<()> {
        self.tree.clear().map_err(storage_error)?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().unwrap();
        let mut store = SledStore::open(&dir.path().join("db")).unwrap();

        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = tempdir().unwrap();
        let mut store = SledStore::open(&dir.path().join("db")).unwrap();

        store.set("program", "[]").unwrap();
        store.set("user", "{}").unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db");

        {
            let mut store = SledStore::open(&path).unwrap();
            store.set("day_index", "2").unwrap();
        }

        let store = SledStore::open(&path).unwrap();
        assert_eq!(store.get("day_index").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_db_path_from_config() {
        if std::env::var(DB_PATH_ENV).is_ok() {
            return;
        }

        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/tmp/coach-db"));

        assert_eq!(
            SledStore::db_path(&config).unwrap(),
            PathBuf::from("/tmp/coach-db")
        );
    }
}
