use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MAX_IMAGES: usize = 6;
pub const MAX_HIGHLIGHTS: usize = 6;
pub const HIGHLIGHT_MIN_LEN: usize = 10;
pub const HIGHLIGHT_MAX_LEN: usize = 500;

/// Placeholder used when no title could be located anywhere on the page.
pub const FALLBACK_TITLE: &str = "Unknown Product";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub current: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<f64>,
    pub currency: String,
}

impl PriceInfo {
    pub fn new(current: f64, original: Option<f64>, currency: &str) -> Self {
        Self {
            current,
            // A strike-through price at or below the selling price is noise.
            original: original.filter(|&o| o > current),
            currency: currency.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Ratings {
    pub average: f64,
    pub count: u64,
}

impl Ratings {
    pub fn new(average: f64, count: u64) -> Self {
        Self {
            average: average.clamp(0.0, 5.0),
            count,
        }
    }
}

/// Canonical extraction result for one product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub title: String,
    pub brand: String,
    pub price: PriceInfo,
    pub images: Vec<String>,
    pub specifications: HashMap<String, String>,
    pub ratings: Ratings,
    pub highlights: Vec<String>,
    pub url: String,
    pub marketplace: String,
}

impl NormalizedProduct {
    pub fn empty(url: &str, marketplace: &str, currency: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            brand: String::new(),
            price: PriceInfo::new(0.0, None, currency),
            images: Vec::new(),
            specifications: HashMap::new(),
            ratings: Ratings::default(),
            highlights: Vec::new(),
            url: url.to_string(),
            marketplace: marketplace.to_string(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        if !title.trim().is_empty() {
            self.title = title.trim().to_string();
        }
    }

    /// Append an image URL, deduplicating by exact string and capping the list.
    pub fn push_image(&mut self, url: String) {
        if self.images.len() < MAX_IMAGES && !self.images.contains(&url) {
            self.images.push(url);
        }
    }

    /// Append a highlight if it survives the length filter and the cap.
    pub fn push_highlight(&mut self, text: String) {
        let len = text.chars().count();
        if (HIGHLIGHT_MIN_LEN..=HIGHLIGHT_MAX_LEN).contains(&len)
            && self.highlights.len() < MAX_HIGHLIGHTS
            && !self.highlights.contains(&text)
        {
            self.highlights.push(text);
        }
    }
}
