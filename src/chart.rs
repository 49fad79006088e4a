use std::sync::{Mutex, PoisonError};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;

use crate::{coordinator::ChartSink, date_bound::DateBound, error::RateError};

/// What the chart widget needs to draw, plus the last failure if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartView {
    pub dates: Vec<DateBound>,
    pub values: Vec<f64>,
    pub label: Option<String>,
    pub error: Option<String>,
}

/// Keeps the most recently rendered chart in memory.
#[derive(Debug, Default)]
pub struct LatestChart {
    view: Mutex<ChartView>,
}

impl LatestChart {
    pub fn snapshot(&self) -> ChartView {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChartSink for LatestChart {
    fn render(&self, dates: &[DateBound], values: &[Decimal], label: &str) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        *view = ChartView {
            dates: dates.to_vec(),
            values: values
                .iter()
                .map(|value| value.to_f64().unwrap_or_default())
                .collect(),
            label: Some(label.to_string()),
            error: None,
        };
    }

    fn show_failure(&self, label: &str, error: &RateError) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        view.error = Some(format!("{label}: {error}"));
    }
}
