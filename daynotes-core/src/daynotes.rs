//! Resolved daynotes settings: where the note file lives and how dates are read.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::day_id::DatePolicy;
use crate::daynotes_config::DaynotesConfig;
use crate::error::{DayNotesError, DayNotesResult};

/// Name of the note file inside the data directory.
pub const DATA_FILE_NAME: &str = "calendarData";

#[derive(Debug, Clone)]
pub struct Daynotes {
    config: DaynotesConfig,
    config_path: PathBuf,
}

impl Daynotes {
    /// Load ~/.config/daynotes/config.toml, creating a commented-out default on first use.
    pub fn load() -> DayNotesResult<Self> {
        let config_path = DaynotesConfig::config_path()?;

        if !config_path.exists() {
            DaynotesConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> DayNotesResult<Self> {
        let config: DaynotesConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| DayNotesError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayNotesError::Config(e.to_string()))?;

        Ok(Daynotes {
            config,
            config_path: config_path.to_path_buf(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_path().join(DATA_FILE_NAME)
    }

    pub fn date_policy(&self) -> DatePolicy {
        self.config.date_policy()
    }

    /// Persist the `strict_dates` setting. Returns true if the value changed.
    pub fn set_strict_dates(&mut self, strict: bool) -> DayNotesResult<bool> {
        if self.config.strict_dates == strict {
            return Ok(false);
        }
        self.config.strict_dates = strict;
        self.config.save(&self.config_path)?;
        Ok(true)
    }
}
