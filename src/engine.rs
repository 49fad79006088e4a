use std::{future::Future, time::Duration};

use log::debug;
use reqwest::{Client, Url};

use crate::{
    date_bound::DateBound, error::RateError, rate_point::RawRatePoint, rate_series::RateSeries,
};

/// "GET this url and give me the body" capability.
pub trait Transport {
    fn get_text(&self, url: &Url) -> impl Future<Output = Result<String, RateError>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, RateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RateError::network("<client>", err))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, url: &Url) -> Result<String, RateError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| RateError::network(url.as_str(), err))?;
        if !resp.status().is_success() {
            return Err(RateError::network(
                url.as_str(),
                format!("unexpected status {}", resp.status()),
            ));
        }

        resp.text()
            .await
            .map_err(|err| RateError::network(url.as_str(), err))
    }
}

/// Builds dynamics requests and normalises their responses into a [`RateSeries`].
#[derive(Debug, Clone)]
pub struct RateQueryEngine<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> RateQueryEngine<T> {
    pub fn new(base_url: &str, transport: T) -> Result<Self, RateError> {
        let base = Url::parse(base_url).map_err(|err| RateError::InvalidBaseUrl {
            value: base_url.to_string(),
            detail: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(RateError::InvalidBaseUrl {
                value: base_url.to_string(),
                detail: "url cannot carry a path".to_string(),
            });
        }

        Ok(Self { base, transport })
    }

    /// `<base>/<currency_id>?startDate=<start>&endDate=<end>`
    pub fn build_endpoint(&self, currency_id: &str, start: DateBound, end: DateBound) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(currency_id);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("startDate", &start.to_string())
            .append_pair("endDate", &end.to_string());
        url
    }

    pub async fn fetch_series(
        &self,
        currency_id: &str,
        start: DateBound,
        end: DateBound,
    ) -> Result<RateSeries, RateError> {
        let url = self.build_endpoint(currency_id, start, end);
        debug!("Requesting rates: {}", url);

        let body = self.transport.get_text(&url).await?;
        let points: Vec<RawRatePoint> = serde_json::from_str(&body).map_err(RateError::malformed)?;

        points.into_iter().map(RawRatePoint::into_parts).collect()
    }
}
