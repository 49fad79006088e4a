use std::time::Duration;

use anyhow::{Context, Result};

use crate::currency::{self, Currency, DEFAULT_CURRENCY_ID};

const DEFAULT_BASE_URL: &str = "https://www.nbrb.by/API/ExRates/Rates/Dynamics";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_WINDOW_DAYS: u64 = 7;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub default_currency: Currency,
    pub http_timeout: Duration,
    pub window_days: u64,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = var("RATES_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let currency_id = var("RATES_DEFAULT_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY_ID.to_string());
        let default_currency = currency::find(currency_id.trim())
            .with_context(|| format!("RATES_DEFAULT_CURRENCY '{currency_id}' is not a known currency"))?;

        let timeout_secs = match var("RATES_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("RATES_HTTP_TIMEOUT_SECS must be a number of seconds, got '{raw}'"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        anyhow::ensure!(timeout_secs > 0, "RATES_HTTP_TIMEOUT_SECS must be positive");

        let window_days = match var("RATES_WINDOW_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("RATES_WINDOW_DAYS must be a number of days, got '{raw}'"))?,
            None => DEFAULT_WINDOW_DAYS,
        };

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            base_url,
            default_currency,
            http_timeout: Duration::from_secs(timeout_secs),
            window_days,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.default_currency.id, "145");
        assert_eq!(settings.http_timeout, Duration::from_secs(30));
        assert_eq!(settings.window_days, 7);
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let settings = settings(&[
            ("RATES_DEFAULT_CURRENCY", "292"),
            ("RATES_HTTP_TIMEOUT_SECS", "5"),
            ("RATES_WINDOW_DAYS", "30"),
            ("BIND_ADDR", "0.0.0.0:9000"),
        ])
        .unwrap();
        assert_eq!(settings.default_currency.name, "EUR");
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
        assert_eq!(settings.window_days, 30);
        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = settings(&[("RATES_BASE_URL", "  ")]).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings(&[("RATES_DEFAULT_CURRENCY", "999")]).is_err());
        assert!(settings(&[("RATES_HTTP_TIMEOUT_SECS", "soon")]).is_err());
        assert!(settings(&[("RATES_HTTP_TIMEOUT_SECS", "0")]).is_err());
        assert!(settings(&[("RATES_WINDOW_DAYS", "-1")]).is_err());
    }
}
