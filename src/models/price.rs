use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    OutOfStock,
    Limited,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::InStock => write!(f, "in-stock"),
            Availability::OutOfStock => write!(f, "out-of-stock"),
            Availability::Limited => write!(f, "limited"),
        }
    }
}

/// One marketplace's quoted price for a product candidate. Price 0 means the
/// price could not be determined; ranking never treats 0 as a real quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub store: String,
    pub price: f64,
    pub currency: String,
    pub url: String,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_title: Option<String>,
}

impl PriceObservation {
    pub fn new(store: &str, price: f64, currency: &str, url: &str) -> Self {
        Self {
            store: store.to_string(),
            price,
            currency: currency.to_string(),
            url: url.to_string(),
            availability: Availability::InStock,
            matched_title: None,
        }
    }

    /// Zero-price placeholder pointing at a marketplace search page. Used when
    /// no competing quote was found; never eligible for best price or savings.
    pub fn search_link(store: &str, url: &str, currency: &str) -> Self {
        Self::new(store, 0.0, currency, url)
    }
}

/// A `PriceObservation` annotated by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrice {
    #[serde(flatten)]
    pub observation: PriceObservation,
    pub is_best_price: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}
