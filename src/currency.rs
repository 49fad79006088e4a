use serde::{Deserialize, Serialize};

/// Quote currency of every NBRB rate.
pub const QUOTE_CURRENCY: &str = "BYN";

pub const DEFAULT_CURRENCY_ID: &str = "145";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub name: String,
}

impl Currency {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Chart label, e.g. `USD/BYN`.
    pub fn series_label(&self) -> String {
        format!("{}/{}", self.name, QUOTE_CURRENCY)
    }
}

const CATALOGUE: &[(&str, &str)] = &[("145", "USD"), ("292", "EUR"), ("298", "RUB")];

/// Default currency list shown by the HTTP adapter. Not exhaustive.
pub fn catalogue() -> Vec<Currency> {
    CATALOGUE
        .iter()
        .map(|(id, name)| Currency::new(*id, *name))
        .collect()
}

pub fn find(id: &str) -> Option<Currency> {
    CATALOGUE
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(id, name)| Currency::new(*id, *name))
}
