//! Parsing of the DATE argument accepted by every command.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use daynotes_core::day_id::{self, DatePolicy, DayId};

/// Parse a day relative to the local date.
pub fn parse_day(input: &str, policy: DatePolicy) -> Result<DayId> {
    parse_day_relative(input, Local::now().date_naive(), policy)
}

/// Accepts `today`, `yesterday`, `tomorrow`, `YYYY-MM-DD` or a day identifier (`W-MM-DD-YYYY`).
pub fn parse_day_relative(input: &str, today: NaiveDate, policy: DatePolicy) -> Result<DayId> {
    let input = input.trim();

    let relative = match input.to_lowercase().as_str() {
        "today" => Some(today),
        "yesterday" => today.pred_opt(),
        "tomorrow" => today.succ_opt(),
        _ => None,
    };
    if let Some(date) = relative {
        return Ok(day_id::encode(date)?);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return day_id::encode(date)
            .with_context(|| format!("Date '{}' is before year {}", input, day_id::MIN_YEAR));
    }

    DayId::parse_with(input, policy).with_context(|| {
        format!(
            "Invalid date '{}'. Expected W-MM-DD-YYYY, YYYY-MM-DD, today, yesterday or tomorrow",
            input
        )
    })
}
