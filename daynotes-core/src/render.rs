//! Plain-text week grid and notes display.

use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::{Calendar, DayNotes};
use crate::day_id::{self, DatePolicy, DayId};
use crate::error::DayNotesResult;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TOP_RULE: &str =
    "_______________________________________________________________________";
const WEEKDAY_HEADER: &str =
    "|  Sunday |  Monday | Tuesday |Wednesday| Thursday| Friday  | Saturday|";
const BOTTOM_RULE: &str =
    "|_________|_________|_________|_________|_________|_________|_________|";

/// Marker placed after the day number of days that have notes.
const NOTES_MARKER: char = '*';

/// English month name for a 1-based month.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// The Sunday-to-Saturday week containing a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    pub target: NaiveDate,
    /// Zero-based day-of-year / 7 + 1. Not ISO-8601 week numbering.
    pub week_number: u32,
    pub days: [NaiveDate; 7],
}

impl WeekView {
    pub fn containing(target: NaiveDate) -> Self {
        let offset = i64::from(target.weekday().num_days_from_sunday());
        let days = std::array::from_fn(|i| target + Duration::days(i as i64 - offset));

        WeekView {
            target,
            week_number: target.ordinal0() / 7 + 1,
            days,
        }
    }

    pub fn for_id(id: &str, policy: DatePolicy) -> DayNotesResult<Self> {
        day_id::decode_with(id, policy).map(Self::containing)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.target.month())
    }

    /// Render without marking any days.
    pub fn render(&self) -> String {
        self.render_with(|_| false)
    }

    /// Render, marking each day that has notes in `calendar`.
    pub fn render_marked(&self, calendar: &Calendar) -> String {
        self.render_with(|date| DayId::try_from(date).is_ok_and(|id| calendar.contains(&id)))
    }

    fn render_with(&self, has_notes: impl Fn(NaiveDate) -> bool) -> String {
        let cells: String = self
            .days
            .iter()
            .map(|&day| {
                let marker = if has_notes(day) { NOTES_MARKER } else { ' ' };
                format!("   {:>2}{}   |", day.day(), marker)
            })
            .collect();

        format!(
            "Week: {}                         {}\n{}\n{TOP_RULE}\n{WEEKDAY_HEADER}\n|{cells}\n{BOTTOM_RULE}\n",
            self.week_number,
            self.target.year(),
            self.month_name(),
        )
    }
}

/// Render the week containing the day `id`.
pub fn render(id: &str) -> DayNotesResult<String> {
    WeekView::for_id(id, DatePolicy::Lenient).map(|view| view.render())
}

/// Print the week containing the day `id` to stdout.
pub fn draw(id: &str) -> DayNotesResult<()> {
    print!("{}", render(id)?);
    Ok(())
}

pub fn format_notes(notes: &DayNotes) -> String {
    format!(
        "Day Quality: {}\nSleep Quality: {}\nTook Meds: {}\n\n",
        notes.day_quality,
        notes.sleep_quality,
        if notes.took_meds { "Yes" } else { "No" }
    )
}

/// Print `notes` to stdout, followed by a blank line.
pub fn display_notes(notes: &DayNotes) {
    print!("{}", format_notes(notes));
}
