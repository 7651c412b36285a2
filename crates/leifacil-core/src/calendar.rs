//! Month arithmetic for index-table lookups.
//!
//! Historical indices (IPCA, SELIC, INPC) are published once per month, so
//! correction only ever needs a `(year, month)` key and the ability to step
//! forward month by month. [`MonthKey`] is that key; its text form is
//! `"YYYY-MM"`, which is also how it appears as a JSON map key.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LeiFacilError;
use crate::types::Rate;
use crate::validate;
use crate::LeiFacilResult;

/// Monthly rates keyed by month, e.g. the IPCA series.
pub type IndexTable = BTreeMap<MonthKey, Rate>;

/// A calendar month. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> LeiFacilResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LeiFacilError::DateError(format!(
                "month must be within 1..=12, got {month}"
            )));
        }
        Ok(MonthKey { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `months` after this one.
    pub fn offset(self, months: u32) -> LeiFacilResult<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| {
            LeiFacilError::DateError(format!("{self} + {months} months is out of range"))
        })?;
        Ok(MonthKey {
            year,
            month: index.rem_euclid(12) as u32 + 1,
        })
    }

    /// `count` consecutive months starting with this one.
    pub fn range(self, count: u32) -> LeiFacilResult<Vec<MonthKey>> {
        validate::periods("count", count)?;
        (0..count).map(|i| self.offset(i)).collect()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = LeiFacilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || LeiFacilError::DateError(format!("expected YYYY-MM, got '{s}'"));
        let (year, month) = s.trim().split_once('-').ok_or_else(bad)?;
        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;
        MonthKey::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Whole calendar months from `start` to `end`.
///
/// A trailing partial month is not counted, unless `end` falls on the last
/// day of its month (31 Jan -> 28 Feb is one month).
pub fn months_between(start: NaiveDate, end: NaiveDate) -> LeiFacilResult<u32> {
    if end < start {
        return Err(LeiFacilError::DateError(format!(
            "end date {end} precedes start date {start}"
        )));
    }

    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() && !is_last_day_of_month(end) {
        months -= 1;
    }

    Ok(months.max(0) as u32)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_rolls_over_year() {
        let key = MonthKey::new(2023, 11).unwrap();
        assert_eq!(key.offset(3).unwrap(), MonthKey::new(2024, 2).unwrap());
        assert_eq!(key.offset(0).unwrap(), key);
    }

    #[test]
    fn test_text_form_round_trips() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn test_range_is_bounded() {
        let key = MonthKey::new(2024, 1).unwrap();
        assert_eq!(key.range(3).unwrap().len(), 3);
        assert!(matches!(
            key.range(u32::MAX),
            Err(LeiFacilError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_month() {
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("202403".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_json_map_keys() {
        let table: IndexTable =
            serde_json::from_str(r#"{"2024-01": "0.0042", "2023-12": "0.0056"}"#).unwrap();
        let first = table.keys().next().unwrap();
        assert_eq!(first.to_string(), "2023-12");
    }

    #[test]
    fn test_months_between_truncates_partial_month() {
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 4, 14)).unwrap(), 2);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 4, 15)).unwrap(), 3);
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 29)).unwrap(), 1);
    }

    #[test]
    fn test_months_between_rejects_reversed_dates() {
        assert!(months_between(date(2024, 5, 1), date(2024, 1, 1)).is_err());
    }
}
