use std::collections::HashMap;

use crate::error::Result;
use crate::models::{DailyPlan, Theme, User};
use crate::program::Program;

pub const THEME_KEY: &str = "theme";
pub const PROGRAM_KEY: &str = "program";
pub const DAY_INDEX_KEY: &str = "day_index";
pub const USER_KEY: &str = "user";

/// String key-value storage the coach state is persisted into
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove every key
    fn clear(&mut self) -> Result<()>;
}

/// In-process store, mostly useful for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Saved user and program, as read back from storage
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState {
    pub user: User,
    pub program: Program,
}

/// Load/save boundary for the coach state.
///
/// Reads are best effort and writes never fail the caller: storage problems
/// are logged and otherwise ignored.
pub struct StateStore<S> {
    store: S,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Restore the saved program and user. Missing keys, an empty program or
    /// any decoding failure all read as "nothing saved".
    pub fn load(&self) -> Option<SavedState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to load saved state: {}", e);
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<SavedState>> {
        let (Some(program), Some(user), Some(day_index)) = (
            self.store.get(PROGRAM_KEY)?,
            self.store.get(USER_KEY)?,
            self.store.get(DAY_INDEX_KEY)?,
        ) else {
            tracing::debug!("No saved program found");
            return Ok(None);
        };

        let days: Vec<DailyPlan> = serde_json::from_str(&program)?;
        if days.is_empty() {
            return Ok(None);
        }

        let user: User = serde_json::from_str(&user)?;
        let day_index: usize = serde_json::from_str(&day_index)?;

        tracing::debug!(days = days.len(), day_index, "Loaded saved program");

        Ok(Some(SavedState {
            user,
            program: Program::from_parts(days, day_index),
        }))
    }

    /// Persist user, program and cursor together. Skipped while the program
    /// is empty.
    pub fn save(&mut self, user: &User, program: &Program) {
        if program.is_empty() {
            tracing::debug!("Program is empty, not saving");
            return;
        }

        if let Err(e) = self.try_save(user, program) {
            tracing::warn!("Failed to save state: {}", e);
        }
    }

    fn try_save(&mut self, user: &User, program: &Program) -> Result<()> {
        let days = serde_json::to_string(program.days())?;
        let user = serde_json::to_string(user)?;
        let day_index = program.current_index().to_string();

        self.store.set(PROGRAM_KEY, &days)?;
        self.store.set(USER_KEY, &user)?;
        self.store.set(DAY_INDEX_KEY, &day_index)?;

        Ok(())
    }

    pub fn load_theme(&self, fallback: Theme) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring saved theme: {}", e);
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!("Failed to read theme: {}", e);
                fallback
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to save theme: {}", e);
        }
    }

    /// Wipe everything, then keep only the theme preference
    pub fn reset(&mut self, theme: Theme) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear saved state: {}", e);
        }
        self.save_theme(theme);
    }
}
