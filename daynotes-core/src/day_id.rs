//! Day identifiers: the `W-MM-DD-YYYY` keys notes are stored under.
//!
//! `W` is the weekday (0 = Sunday) and is informational only. Decoding
//! ignores it and encoding recomputes it, so an identifier with a wrong
//! weekday corrects itself after one round-trip.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DayNotesError, DayNotesResult};

const SEPARATOR: char = '-';

/// Earliest year an identifier can hold. A negative year would put a
/// second separator into the year field.
pub const MIN_YEAR: i32 = 1;

/// How out-of-range month/day values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Roll over into adjacent months/years (day 32 of March is April 1).
    #[default]
    Lenient,
    /// Reject anything that is not already a real calendar date.
    Strict,
}

impl DatePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DatePolicy::Strict
        } else {
            DatePolicy::Lenient
        }
    }
}

/// Unnormalized calendar fields. `month` is 1-based; any value is accepted
/// until [`DateFields::normalize`] resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateFields {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        DateFields { year, month, day }
    }

    /// Resolve the fields into a real date.
    ///
    /// Month overflow carries into the year first, then the day is applied as an
    /// offset from the first of that month, so `2024-02-30` becomes `2024-03-01`
    /// and `2024-13-01` becomes `2025-01-01`. Dates before [`MIN_YEAR`] are
    /// `DateOutOfRange` under either policy.
    pub fn normalize(&self, policy: DatePolicy) -> DayNotesResult<NaiveDate> {
        let date = self.resolve(policy)?;
        if date.year() < MIN_YEAR {
            return Err(self.out_of_range());
        }
        Ok(date)
    }

    fn resolve(&self, policy: DatePolicy) -> DayNotesResult<NaiveDate> {
        let exact = u32::try_from(self.month)
            .ok()
            .zip(u32::try_from(self.day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(self.year, month, day));

        match (exact, policy) {
            (Some(date), _) => Ok(date),
            (None, DatePolicy::Strict) => Err(DayNotesError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            }),
            (None, DatePolicy::Lenient) => self.roll_over(),
        }
    }

    fn out_of_range(&self) -> DayNotesError {
        DayNotesError::DateOutOfRange {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    fn roll_over(&self) -> DayNotesResult<NaiveDate> {
        let out_of_range = || self.out_of_range();

        let months = i64::from(self.month) - 1;
        let year = i32::try_from(i64::from(self.year) + months.div_euclid(12))
            .map_err(|_| out_of_range())?;
        // rem_euclid(12) is always in 0..12
        let month = months.rem_euclid(12) as u32 + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        first
            .checked_add_signed(Duration::days(i64::from(self.day) - 1))
            .ok_or_else(out_of_range)
    }
}

impl From<NaiveDate> for DateFields {
    fn from(date: NaiveDate) -> Self {
        DateFields {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

/// Canonical key for one calendar day.
///
/// Serialized as its `W-MM-DD-YYYY` string. Two spellings of the same date
/// (e.g. with different weekday fields) parse to equal identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayId {
    date: NaiveDate,
}

impl DayId {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Weekday index, 0 = Sunday.
    pub fn weekday(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    pub fn today() -> Self {
        // The local clock never reads a year before MIN_YEAR
        DayId {
            date: Local::now().date_naive(),
        }
    }

    /// Parse an identifier, treating out-of-range fields per `policy`.
    pub fn parse_with(id: &str, policy: DatePolicy) -> DayNotesResult<Self> {
        decode_with(id, policy).and_then(encode)
    }
}

impl TryFrom<NaiveDate> for DayId {
    type Error = DayNotesError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date.year() < MIN_YEAR {
            return Err(DateFields::from(date).out_of_range());
        }
        Ok(DayId { date })
    }
}

impl FromStr for DayId {
    type Err = DayNotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayId::parse_with(s, DatePolicy::Lenient)
    }
}

impl TryFrom<String> for DayId {
    type Error = DayNotesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayId> for String {
    fn from(id: DayId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{sep}{:02}{sep}{:02}{sep}{}",
            self.weekday(),
            self.date.month(),
            self.date.day(),
            self.date.year(),
            sep = SEPARATOR
        )
    }
}

/// Encode a date. Fails only for dates before [`MIN_YEAR`].
pub fn encode(date: NaiveDate) -> DayNotesResult<DayId> {
    DayId::try_from(date)
}

/// Normalize raw fields and encode the result.
pub fn encode_fields(fields: DateFields, policy: DatePolicy) -> DayNotesResult<DayId> {
    fields.normalize(policy).and_then(encode)
}

/// Decode an identifier, rolling out-of-range month/day values over.
pub fn decode(id: &str) -> DayNotesResult<NaiveDate> {
    decode_with(id, DatePolicy::Lenient)
}

/// Decode an identifier.
///
/// Needs at least four `-`-separated numeric fields; anything after the
/// fourth is ignored. The weekday field must be numeric but its value is
/// discarded.
pub fn decode_with(id: &str, policy: DatePolicy) -> DayNotesResult<NaiveDate> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    if parts.len() < 4 {
        return Err(DayNotesError::format(
            id,
            format!("expected 4 fields separated by '{SEPARATOR}', found {}", parts.len()),
        ));
    }

    let field = |index: usize, name: &str| -> DayNotesResult<i32> {
        parts[index].trim().parse::<i32>().map_err(|_| {
            DayNotesError::format(id, format!("{name} '{}' is not a number", parts[index]))
        })
    };

    let _weekday = field(0, "weekday")?;
    let fields = DateFields {
        month: field(1, "month")?,
        day: field(2, "day")?,
        year: field(3, "year")?,
    };

    fields.normalize(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode_pads_month_and_day() {
        assert_eq!(encode(ymd(2024, 3, 5)).unwrap().to_string(), "2-03-05-2024");
        assert_eq!(encode(ymd(2024, 3, 15)).unwrap().to_string(), "5-03-15-2024");
        assert_eq!(encode(ymd(2023, 12, 31)).unwrap().to_string(), "0-12-31-2023");
    }

    #[test]
    fn test_decode_ignores_weekday_field() {
        assert_eq!(decode("0-03-15-2024").unwrap(), ymd(2024, 3, 15));
        assert_eq!(decode("5-03-15-2024").unwrap(), ymd(2024, 3, 15));
    }

    #[test]
    fn test_wrong_weekday_self_corrects() {
        let id: DayId = "0-03-15-2024".parse().unwrap();
        assert_eq!(id.to_string(), "5-03-15-2024");
        assert_eq!(id, "5-03-15-2024".parse().unwrap());
    }

    #[test]
    fn test_roundtrip_over_two_years() {
        let mut date = ymd(2023, 1, 1);
        while date < ymd(2025, 1, 1) {
            let id = encode(date).unwrap();
            assert_eq!(decode(&id.to_string()).unwrap(), date);
            let again = encode(decode(&id.to_string()).unwrap()).unwrap();
            assert_eq!(again.to_string(), id.to_string());
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_decode_rejects_too_few_fields() {
        let err = decode("badid").unwrap_err();
        assert!(matches!(err, DayNotesError::Format { .. }));

        let err = decode("5-03-2024").unwrap_err();
        assert!(matches!(err, DayNotesError::Format { .. }));
    }

    #[test]
    fn test_decode_rejects_non_numeric_fields() {
        for id in ["x-03-15-2024", "5-mar-15-2024", "5-03-xv-2024", "5-03-15-"] {
            let err = decode(id).unwrap_err();
            assert!(matches!(err, DayNotesError::Format { .. }), "{id}");
        }
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        assert_eq!(decode("5-03-15-2024-extra").unwrap(), ymd(2024, 3, 15));
    }

    #[test]
    fn test_lenient_rolls_day_over() {
        assert_eq!(decode("0-03-32-2024").unwrap(), ymd(2024, 4, 1));
        assert_eq!(decode("0-02-30-2024").unwrap(), ymd(2024, 3, 1));
        assert_eq!(decode("0-03-00-2024").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_lenient_rolls_month_over() {
        assert_eq!(decode("0-13-01-2024").unwrap(), ymd(2025, 1, 1));
        assert_eq!(decode("0-00-15-2024").unwrap(), ymd(2023, 12, 15));
        assert_eq!(decode("0-12-32-2024").unwrap(), ymd(2025, 1, 1));
    }

    #[test]
    fn test_strict_rejects_rollover() {
        for id in ["0-03-32-2024", "0-13-01-2024", "0-02-30-2023", "0-00-10-2024"] {
            let err = decode_with(id, DatePolicy::Strict).unwrap_err();
            assert!(matches!(err, DayNotesError::InvalidDate { .. }), "{id}");
        }
        assert_eq!(
            decode_with("5-03-15-2024", DatePolicy::Strict).unwrap(),
            ymd(2024, 3, 15)
        );
    }

    #[test]
    fn test_encode_fields_normalizes() {
        let id = encode_fields(DateFields::new(2024, 1, 32), DatePolicy::Lenient).unwrap();
        assert_eq!(id.to_string(), "4-02-01-2024");
        assert!(encode_fields(DateFields::new(2024, 1, 32), DatePolicy::Strict).is_err());
    }

    #[test]
    fn test_encode_is_stable() {
        let date = ymd(2024, 2, 29);
        assert_eq!(encode(date).unwrap().to_string(), encode(date).unwrap().to_string());
    }

    fn assert_roundtrip(date: NaiveDate) {
        let id = encode(date).unwrap().to_string();
        assert_eq!(decode(&id).unwrap(), date, "{id}");
        assert_eq!(encode(decode(&id).unwrap()).unwrap().to_string(), id);
    }

    #[test]
    fn test_roundtrip_at_year_edges() {
        assert_roundtrip(ymd(1, 1, 1));
        assert_roundtrip(ymd(5, 1, 1));
        assert_roundtrip(ymd(999, 12, 31));
        assert_roundtrip(ymd(10000, 1, 1));
        assert_roundtrip(ymd(262_000, 6, 30));
    }

    #[test]
    fn test_short_and_long_years_are_not_padded() {
        let early = decode("0-01-01-5").unwrap();
        assert_eq!(early, ymd(5, 1, 1));
        assert!(encode(early).unwrap().to_string().ends_with("-01-01-5"));

        let late = decode("0-01-01-10000").unwrap();
        assert_eq!(late, ymd(10000, 1, 1));
        assert!(encode(late).unwrap().to_string().ends_with("-01-01-10000"));
    }

    #[test]
    fn test_years_before_one_are_out_of_range() {
        for id in ["0-01-01-0", "0-01-00-0", "0-01-00-1", "0-00-31-1"] {
            let err = decode(id).unwrap_err();
            assert!(matches!(err, DayNotesError::DateOutOfRange { .. }), "{id}");
            assert!(id.parse::<DayId>().is_err(), "{id}");
        }
        assert!(matches!(
            decode_with("0-01-01-0", DatePolicy::Strict),
            Err(DayNotesError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            encode(ymd(0, 6, 1)),
            Err(DayNotesError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            encode(ymd(-1, 12, 31)),
            Err(DayNotesError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_year_past_chrono_range_is_out_of_range() {
        let err = decode("0-01-01-300000").unwrap_err();
        assert!(matches!(err, DayNotesError::DateOutOfRange { .. }));

        let err = decode_with("0-01-01-300000", DatePolicy::Strict).unwrap_err();
        assert!(matches!(err, DayNotesError::InvalidDate { .. }));
    }

    #[test]
    fn test_day_id_serializes_as_string() {
        let id: DayId = "5-03-15-2024".parse().unwrap();
        let value = toml::Value::try_from(std::collections::BTreeMap::from([("id", id)])).unwrap();
        assert_eq!(value["id"].as_str(), Some("5-03-15-2024"));
    }

    #[test]
    fn test_day_ids_order_by_date() {
        let a: DayId = "0-12-31-2023".parse().unwrap();
        let b: DayId = "1-01-01-2024".parse().unwrap();
        assert!(a < b);
    }
}
