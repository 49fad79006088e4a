use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{date_bound::DateBound, error::RateError};

const DATE_PREFIX_LEN: usize = 10;

/// One record of the dynamics endpoint, e.g.
/// `{"Cur_ID":145,"Date":"2024-03-08T00:00:00","Cur_OfficialRate":3.2766}`.
#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct RawRatePoint {
    #[serde(rename = "Cur_OfficialRate", with = "rust_decimal::serde::float")]
    pub official_rate: Decimal,
    #[serde(rename = "Date")]
    pub date: String,
}

impl RawRatePoint {
    pub fn into_parts(self) -> Result<(DateBound, Decimal), RateError> {
        let prefix = self
            .date
            .get(..DATE_PREFIX_LEN)
            .ok_or_else(|| RateError::malformed(format!("timestamp too short: '{}'", self.date)))?;
        let date = prefix
            .parse::<DateBound>()
            .map_err(|err| RateError::malformed(format!("bad timestamp '{}': {err}", self.date)))?;

        Ok((date, self.official_rate))
    }
}
