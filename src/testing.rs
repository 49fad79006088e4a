use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use reqwest::Url;
use tokio::sync::oneshot;

use rust_decimal::Decimal;

use crate::{coordinator::ChartSink, date_bound::DateBound, engine::Transport, error::RateError};

#[derive(Clone)]
enum Reply {
    Body(String),
    Fail,
}

#[derive(Default)]
struct Inner {
    replies: HashMap<String, Reply>,
    gated: HashMap<String, oneshot::Receiver<Reply>>,
    requested: Vec<String>,
}

/// In-memory transport keyed by full request url.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Arc<Mutex<Inner>>,
}

/// Completes a gated request when the test decides to.
pub(crate) struct Gate(oneshot::Sender<Reply>);

impl Gate {
    pub fn open(self, body: impl Into<String>) {
        let _ = self.0.send(Reply::Body(body.into()));
    }

    pub fn fail(self) {
        let _ = self.0.send(Reply::Fail);
    }
}

impl FakeTransport {
    pub fn respond(&self, url: &Url, body: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .replies
            .insert(url.to_string(), Reply::Body(body.into()));
    }

    pub fn fail(&self, url: &Url) {
        self.inner
            .lock()
            .unwrap()
            .replies
            .insert(url.to_string(), Reply::Fail);
    }

    pub fn gate(&self, url: &Url) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.inner
            .lock()
            .unwrap()
            .gated
            .insert(url.to_string(), rx);
        Gate(tx)
    }

    pub fn requested(&self) -> Vec<String> {
        self.inner.lock().unwrap().requested.clone()
    }
}

impl Transport for FakeTransport {
    async fn get_text(&self, url: &Url) -> Result<String, RateError> {
        let key = url.to_string();
        let pending = {
            let mut inner = self.inner.lock().unwrap();
            inner.requested.push(key.clone());
            match inner.gated.remove(&key) {
                Some(rx) => Err(rx),
                None => Ok(inner.replies.get(&key).cloned()),
            }
        };

        let reply = match pending {
            Ok(reply) => reply,
            Err(rx) => rx.await.ok(),
        };

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail) => Err(RateError::network(key, "connection refused")),
            None => Err(RateError::network(key, "no reply scripted")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SinkEvent {
    Render {
        dates: Vec<DateBound>,
        values: Vec<Decimal>,
        label: String,
    },
    Failure {
        label: String,
    },
}

#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn renders(&self) -> Vec<(Vec<DateBound>, Vec<Decimal>, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Render {
                    dates,
                    values,
                    label,
                } => Some((dates, values, label)),
                SinkEvent::Failure { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Failure { label } => Some(label),
                SinkEvent::Render { .. } => None,
            })
            .collect()
    }

    pub fn last_render_label(&self) -> Option<String> {
        self.renders().pop().map(|(_, _, label)| label)
    }
}

impl ChartSink for RecordingSink {
    fn render(&self, dates: &[DateBound], values: &[Decimal], label: &str) {
        self.events.lock().unwrap().push(SinkEvent::Render {
            dates: dates.to_vec(),
            values: values.to_vec(),
            label: label.to_string(),
        });
    }

    fn show_failure(&self, label: &str, _error: &RateError) {
        self.events.lock().unwrap().push(SinkEvent::Failure {
            label: label.to_string(),
        });
    }
}
