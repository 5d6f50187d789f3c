//! Global daynotes configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::day_id::DatePolicy;
use crate::error::{DayNotesError, DayNotesResult};

static DEFAULT_DATA_DIR: &str = "~/.daynotes";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Global configuration at ~/.config/daynotes/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DaynotesConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Reject out-of-range months/days instead of rolling them over.
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_dates: bool,
}

impl Default for DaynotesConfig {
    fn default() -> Self {
        DaynotesConfig {
            data_dir: default_data_dir(),
            strict_dates: false,
        }
    }
}

impl DaynotesConfig {
    pub fn config_path() -> DayNotesResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayNotesError::Config("Could not determine config directory".into()))?
            .join("daynotes");

        Ok(config_dir.join("config.toml"))
    }

    pub fn date_policy(&self) -> DatePolicy {
        DatePolicy::from_strict(self.strict_dates)
    }

    /// Save the config to `path`.
    pub fn save(&self, path: &Path) -> DayNotesResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DayNotesError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| DayNotesError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayNotesResult<()> {
        let contents = format!(
            "\
# daynotes configuration

# Where your notes file lives:
# data_dir = \"{}\"

# Reject impossible dates (e.g. March 32) instead of rolling them over:
# strict_dates = true
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayNotesError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayNotesError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
