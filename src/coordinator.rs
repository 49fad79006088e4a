use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    currency::{self, Currency},
    date_bound::DateBound,
    engine::{RateQueryEngine, Transport},
    error::RateError,
    selection::Selection,
};

/// Whatever draws the chart.
pub trait ChartSink {
    fn render(&self, dates: &[DateBound], values: &[Decimal], label: &str);

    /// The latest query failed; the previously rendered chart stays as it is.
    fn show_failure(&self, label: &str, error: &RateError);
}

#[derive(Debug)]
pub enum QueryOutcome {
    Rendered { points: usize },
    /// A newer query was issued before this one completed; its result was dropped.
    Superseded,
    Failed(RateError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyChoice {
    #[serde(flatten)]
    pub currency: Currency,
    pub selected: bool,
}

struct State {
    selection: Selection,
    issued: u64,
}

/// Applies user intents to the [`Selection`] and re-renders after each one.
///
/// Every intent tags its query with the next sequence number. Only the query
/// holding the latest tag when it completes may touch the sink.
pub struct SelectionCoordinator<T, S> {
    engine: RateQueryEngine<T>,
    sink: S,
    default_currency: Currency,
    window_days: u64,
    state: Mutex<State>,
}

impl<T: Transport, S: ChartSink> SelectionCoordinator<T, S> {
    pub fn new(
        engine: RateQueryEngine<T>,
        sink: S,
        default_currency: Currency,
        window_days: u64,
    ) -> Self {
        let selection = Selection::default_window(
            default_currency.clone(),
            Local::now().date_naive(),
            window_days,
        );

        Self {
            engine,
            sink,
            default_currency,
            window_days,
            state: Mutex::new(State {
                selection,
                issued: 0,
            }),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn selection(&self) -> Selection {
        self.lock().selection.clone()
    }

    /// Catalogue entries plus the active currency; exactly one is selected.
    pub fn currency_choices(&self) -> Vec<CurrencyChoice> {
        let active = self.lock().selection.currency.clone();
        let mut choices: Vec<CurrencyChoice> = currency::catalogue()
            .into_iter()
            .map(|currency| CurrencyChoice {
                selected: currency.id == active.id,
                currency,
            })
            .collect();
        if !choices.iter().any(|choice| choice.selected) {
            choices.push(CurrencyChoice {
                currency: active,
                selected: true,
            });
        }
        choices
    }

    pub async fn initialize(&self) -> QueryOutcome {
        self.initialize_on(Local::now().date_naive()).await
    }

    pub async fn initialize_on(&self, today: NaiveDate) -> QueryOutcome {
        let default = Selection::default_window(self.default_currency.clone(), today, self.window_days);
        self.transition(move |selection| *selection = default).await
    }

    pub async fn on_currency_chosen(&self, currency: Currency) -> QueryOutcome {
        self.transition(move |selection| selection.choose_currency(currency))
            .await
    }

    pub async fn on_start_date_changed(&self, new_start: DateBound) -> QueryOutcome {
        self.transition(move |selection| selection.set_start(new_start))
            .await
    }

    pub async fn on_end_date_changed(&self, new_end: DateBound) -> QueryOutcome {
        self.transition(move |selection| selection.set_end(new_end))
            .await
    }

    async fn transition(&self, apply: impl FnOnce(&mut Selection)) -> QueryOutcome {
        let (tag, snapshot) = {
            let mut state = self.lock();
            apply(&mut state.selection);
            state.issued += 1;
            (state.issued, state.selection.clone())
        };
        debug!(
            "Query #{} for {} [{}, {}]",
            tag, snapshot.currency.id, snapshot.start_date, snapshot.end_date
        );

        let result = self
            .engine
            .fetch_series(&snapshot.currency.id, snapshot.start_date, snapshot.end_date)
            .await;

        // Held while rendering so a newer query cannot slip in between check and draw.
        let state = self.lock();
        if state.issued != tag {
            debug!("Dropping query #{} superseded by #{}", tag, state.issued);
            return QueryOutcome::Superseded;
        }

        let label = snapshot.currency.series_label();
        match result {
            Ok(series) => {
                self.sink.render(series.dates(), series.values(), &label);
                info!("Rendered {} with {} points", label, series.len());
                QueryOutcome::Rendered {
                    points: series.len(),
                }
            }
            Err(err) => {
                warn!("Query #{} for {} failed: {}", tag, label, err);
                self.sink.show_failure(&label, &err);
                QueryOutcome::Failed(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
