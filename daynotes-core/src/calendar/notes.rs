//! The metrics recorded for a single day.

use serde::{Deserialize, Serialize};

/// Notes for one day. Ratings are free integers; no range is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayNotes {
    pub day_quality: i32,
    pub sleep_quality: i32,
    pub took_meds: bool,
}

impl DayNotes {
    pub fn new(day_quality: i32, sleep_quality: i32, took_meds: bool) -> Self {
        DayNotes {
            day_quality,
            sleep_quality,
            took_meds,
        }
    }
}
