use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use fitness_coach::models::Theme;
use fitness_coach::{Coach, StateStore};
use std::path::Path;

use crate::api::GeminiClient;
use crate::config::Config;
use crate::storage::SledStore;

/// Everything a command needs: configuration, the saved state and the
/// coaching session restored from it
pub struct CoachContext {
    pub config: Config,
    pub coach: Coach,
    pub theme: Theme,
    state: StateStore<SledStore>,
}

impl CoachContext {
    /// Load config, open storage and restore the previous session
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let store = SledStore::init(&config).context("Failed to open local storage")?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: SledStore) -> Self {
        let state = StateStore::new(store);
        let theme = state.load_theme(config.ui.default_theme);

        let coach = match state.load() {
            Some(saved) => Coach::new(saved.user, saved.program),
            None => Coach::default(),
        };

        Self {
            config,
            coach,
            theme,
            state,
        }
    }

    /// Persist the user and program
    pub fn save(&mut self) {
        self.state.save(self.coach.user(), self.coach.program());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.state.save_theme(theme);
    }

    /// Drop the session and saved data, keeping the theme
    pub fn reset(&mut self) {
        self.coach.reset();
        self.state.reset(self.theme);
    }

    pub fn generator(&self) -> Result<GeminiClient> {
        GeminiClient::new(&self.config)
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.config.ui.date_format).to_string()
    }
}
