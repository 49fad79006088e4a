pub mod chart;
pub mod config;
pub mod coordinator;
pub mod currency;
pub mod date_bound;
pub mod engine;
pub mod error;
mod rate_point;
pub mod rate_series;
pub mod routes;
pub mod selection;

#[cfg(test)]
mod testing;

pub use chart::{ChartView, LatestChart};
pub use config::Settings;
pub use coordinator::{ChartSink, CurrencyChoice, QueryOutcome, SelectionCoordinator};
pub use currency::Currency;
pub use date_bound::{DateBound, compute_date};
pub use engine::{HttpTransport, RateQueryEngine, Transport};
pub use error::RateError;
pub use rate_series::RateSeries;
pub use selection::{DateLimits, Selection};
