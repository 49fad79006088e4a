use chrono::NaiveDate;
use serde::Serialize;

use crate::{currency::Currency, date_bound::DateBound};

/// Allowed min/max of the two date inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLimits {
    pub start_max: DateBound,
    pub end_min: Option<DateBound>,
    pub end_max: DateBound,
}

/// Currency and date window driving the next query.
///
/// `start_date <= end_date` holds after every mutation: an edit that would break
/// the ordering drags the other bound along with it. The limits follow, so each
/// date always sits inside its own input's min/max.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub currency: Currency,
    pub start_date: DateBound,
    pub end_date: DateBound,
    pub limits: DateLimits,
}

impl Selection {
    /// `[today - window_days, today]` for `currency`.
    pub fn default_window(currency: Currency, today: NaiveDate, window_days: u64) -> Self {
        let window = i64::try_from(window_days).unwrap_or(i64::MAX);
        let end_date = DateBound::new(today);
        let start_date = DateBound::offset_from(today, -window);

        Self {
            currency,
            start_date,
            end_date,
            limits: DateLimits {
                start_max: end_date,
                end_min: None,
                end_max: end_date,
            },
        }
    }

    pub fn choose_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// A start past `end_max` is honoured; the dragged end date lifts `end_max` with it.
    pub fn set_start(&mut self, new_start: DateBound) {
        self.start_date = new_start;
        self.limits.end_min = Some(new_start);
        if new_start > self.end_date {
            self.end_date = new_start;
            self.limits.start_max = new_start;
            self.limits.end_max = self.limits.end_max.max(new_start);
        }
    }

    pub fn set_end(&mut self, new_end: DateBound) {
        self.end_date = new_end;
        self.limits.start_max = new_end;
        self.limits.end_max = self.limits.end_max.max(new_end);
        if new_end < self.start_date {
            self.start_date = new_end;
            self.limits.end_min = Some(new_end);
        }
    }
}
