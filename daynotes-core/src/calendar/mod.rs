//! In-memory note store keyed by day.

mod file;
mod notes;

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::day_id::DayId;
use crate::error::DayNotesResult;

pub use file::LoadSource;
pub use notes::DayNotes;

/// Every day that has notes, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    days: BTreeMap<DayId, DayNotes>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    // PERSISTENCE:

    /// Load the calendar at `path`. A missing or empty file yields an empty calendar.
    pub fn load(path: &Path) -> DayNotesResult<Self> {
        file::open(path).map(|(calendar, _)| calendar)
    }

    /// Like [`Calendar::load`], also reporting whether the file existed.
    pub fn open(path: &Path) -> DayNotesResult<(Self, LoadSource)> {
        file::open(path)
    }

    /// Replace the file at `path` with the whole calendar.
    pub fn save(&self, path: &Path) -> DayNotesResult<()> {
        file::save(path, self)
    }

    // NOTES OPERATIONS:

    /// Insert or overwrite the notes for `id`.
    pub fn add_day(&mut self, id: DayId, notes: DayNotes) {
        self.days.insert(id, notes);
    }

    /// Notes for `id`, or zero-valued notes if the day was never written.
    pub fn day_notes(&self, id: &DayId) -> DayNotes {
        self.days.get(id).copied().unwrap_or_default()
    }

    pub fn get(&self, id: &DayId) -> Option<&DayNotes> {
        self.days.get(id)
    }

    pub fn contains(&self, id: &DayId) -> bool {
        self.days.contains_key(id)
    }

    pub fn remove_day(&mut self, id: &DayId) -> Option<DayNotes> {
        self.days.remove(id)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayId, &DayNotes)> {
        self.days.iter()
    }

    /// Days with notes in the given month (1-based), in date order.
    pub fn days_in_month(&self, year: i32, month: u32) -> Vec<(DayId, DayNotes)> {
        self.days
            .iter()
            .filter(|(id, _)| id.date().year() == year && id.date().month() == month)
            .map(|(id, notes)| (*id, *notes))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = (&'a DayId, &'a DayNotes);
    type IntoIter = std::collections::btree_map::Iter<'a, DayId, DayNotes>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DayId {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_day_overwrites() {
        let mut calendar = Calendar::new();
        calendar.add_day(id("5-03-15-2024"), DayNotes::new(1, 2, false));
        calendar.add_day(id("5-03-15-2024"), DayNotes::new(5, 3, true));

        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.day_notes(&id("5-03-15-2024")), DayNotes::new(5, 3, true));
    }

    #[test]
    fn test_unwritten_day_reads_as_default() {
        let calendar = Calendar::new();
        let notes = calendar.day_notes(&id("1-01-01-2024"));

        assert_eq!(notes, DayNotes::new(0, 0, false));
        assert!(calendar.get(&id("1-01-01-2024")).is_none());
        assert!(calendar.is_empty(), "reading must not insert");
    }

    #[test]
    fn test_differently_spelled_ids_share_an_entry() {
        let mut calendar = Calendar::new();
        calendar.add_day(id("0-03-15-2024"), DayNotes::new(4, 4, true));

        assert!(calendar.contains(&id("5-03-15-2024")));
    }

    #[test]
    fn test_ratings_are_not_range_checked() {
        let mut calendar = Calendar::new();
        calendar.add_day(id("5-03-15-2024"), DayNotes::new(-40, 9000, false));
        assert_eq!(calendar.day_notes(&id("5-03-15-2024")).sleep_quality, 9000);
    }

    #[test]
    fn test_remove_day() {
        let mut calendar = Calendar::new();
        calendar.add_day(id("5-03-15-2024"), DayNotes::new(1, 1, true));

        assert_eq!(calendar.remove_day(&id("5-03-15-2024")), Some(DayNotes::new(1, 1, true)));
        assert_eq!(calendar.remove_day(&id("5-03-15-2024")), None);
    }

    #[test]
    fn test_days_in_month_filters_and_orders() {
        let mut calendar = Calendar::new();
        calendar.add_day(id("0-03-31-2024"), DayNotes::default());
        calendar.add_day(id("1-04-01-2024"), DayNotes::default());
        calendar.add_day(id("5-03-01-2024"), DayNotes::default());
        calendar.add_day(id("5-03-15-2023"), DayNotes::default());

        let march: Vec<String> = calendar
            .days_in_month(2024, 3)
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(march, vec!["5-03-01-2024", "0-03-31-2024"]);
    }
}
