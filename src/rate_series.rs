use rust_decimal::Decimal;

use crate::date_bound::DateBound;

/// Aligned dates and rates, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    dates: Vec<DateBound>,
    values: Vec<Decimal>,
}

impl RateSeries {
    pub fn dates(&self) -> &[DateBound] {
        &self.dates
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<(DateBound, Decimal)> for RateSeries {
    fn from_iter<I: IntoIterator<Item = (DateBound, Decimal)>>(iter: I) -> Self {
        let (dates, values) = iter.into_iter().unzip();
        Self { dates, values }
    }
}
