//! Settings shared by every command: which file to use and how to read dates.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use daynotes_core::calendar::{Calendar, LoadSource};
use daynotes_core::day_id::{DatePolicy, DayId};
use daynotes_core::daynotes::Daynotes;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::utils::date_arg;

pub struct Context {
    pub daynotes: Daynotes,
    pub data_file: PathBuf,
    /// `--strict` was given; overrides the configured policy.
    force_strict: bool,
}

impl Context {
    pub fn new(file: Option<PathBuf>, strict: bool) -> Result<Self> {
        let daynotes = Daynotes::load()?;
        let data_file = file.unwrap_or_else(|| daynotes.data_file());
        let ctx = Context {
            daynotes,
            data_file,
            force_strict: strict,
        };

        debug!(file = %ctx.data_file.display(), policy = ?ctx.policy(), "resolved settings");
        Ok(ctx)
    }

    pub fn policy(&self) -> DatePolicy {
        if self.force_strict {
            DatePolicy::Strict
        } else {
            self.daynotes.date_policy()
        }
    }

    /// Load the calendar, telling the user when a new one is being started.
    pub fn load_calendar(&self) -> Result<Calendar> {
        let (calendar, source) = Calendar::open(&self.data_file)
            .with_context(|| format!("Failed to load notes from {}", self.data_file.display()))?;

        if source == LoadSource::Fresh {
            println!("{}", "No calendar found. Making new one.".dimmed());
        }

        Ok(calendar)
    }

    pub fn save_calendar(&self, calendar: &Calendar) -> Result<()> {
        calendar
            .save(&self.data_file)
            .with_context(|| format!("Failed to save notes to {}", self.data_file.display()))
    }

    /// Resolve an optional day argument, defaulting to today.
    pub fn day(&self, input: Option<&str>) -> Result<DayId> {
        match input {
            Some(s) => date_arg::parse_day(s, self.policy()),
            None => Ok(DayId::today()),
        }
    }
}
