use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate request to {url} failed: {detail}")]
    Network { url: String, detail: String },

    #[error("malformed rate response: {detail}")]
    MalformedResponse { detail: String },

    #[error("invalid base url '{value}': {detail}")]
    InvalidBaseUrl { value: String, detail: String },
}

impl RateError {
    pub fn network(url: impl Into<String>, detail: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            detail: detail.to_string(),
        }
    }

    pub fn malformed(detail: impl ToString) -> Self {
        Self::MalformedResponse {
            detail: detail.to_string(),
        }
    }
}
