use std::{fmt, str::FromStr};

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FORMAT: &str = "%Y-%m-%d";

/// Calendar date rendered as a zero-padded `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateBound(NaiveDate);

impl DateBound {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `today` shifted by a signed number of days. Saturates at the calendar limits.
    pub fn offset_from(today: NaiveDate, offset_days: i64) -> Self {
        let days = Days::new(offset_days.unsigned_abs());
        let shifted = if offset_days < 0 {
            today.checked_sub_days(days)
        } else {
            today.checked_add_days(days)
        };

        Self(shifted.unwrap_or(if offset_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        }))
    }
}

/// Today's local date shifted by `offset_days` (negative is the past).
pub fn compute_date(offset_days: i64) -> DateBound {
    DateBound::offset_from(Local::now().date_naive(), offset_days)
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DateBound {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, FORMAT).map(Self)
    }
}

impl Serialize for DateBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateBound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
