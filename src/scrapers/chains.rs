use crate::parsers::clean_text;
use scraper::{ElementRef, Selector};
use std::collections::HashMap;
use tracing::debug;

/// One content-location strategy. Chains are ordered lists of these, tried
/// until the first one yields a non-empty value.
#[derive(Debug, Clone, Copy)]
pub enum Locator {
    /// Text content of the first element matching the selector.
    Text(&'static str),
    /// Attribute value of elements matching the selector.
    Attr(&'static str, &'static str),
}

/// Label/value row locator for specification tables.
#[derive(Debug, Clone, Copy)]
pub struct SpecLocator {
    pub row: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Per-marketplace field-location tables for a product page. Configuration,
/// not code: every site shares one extraction algorithm.
pub struct ProductChains {
    pub title: &'static [Locator],
    pub brand: &'static [Locator],
    pub price: &'static [Locator],
    pub original_price: &'static [Locator],
    pub images: &'static [Locator],
    pub specifications: &'static [SpecLocator],
    pub rating_value: &'static [Locator],
    pub rating_count: &'static [Locator],
    pub highlights: &'static [Locator],
}

/// Field-location tables for a marketplace's search-results page. Search
/// markup differs from product markup, so these are separate strategy sets.
pub struct SearchChains {
    /// Selector for one result card; only the first card is read.
    pub result: &'static str,
    pub title: &'static [Locator],
    pub price: &'static [Locator],
    pub link: &'static [Locator],
}

fn parse_selector(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(sel) => Some(sel),
        Err(e) => {
            debug!("Invalid selector {:?}: {:?}", raw, e);
            None
        }
    }
}

fn locator_values(scope: ElementRef, locator: &Locator) -> Vec<String> {
    let (raw_selector, attr) = match locator {
        Locator::Text(sel) => (*sel, None),
        Locator::Attr(sel, attr) => (*sel, Some(*attr)),
    };
    let selector = match parse_selector(raw_selector) {
        Some(sel) => sel,
        None => return Vec::new(),
    };

    scope
        .select(&selector)
        .filter_map(|element| match attr {
            Some(name) => element.value().attr(name).map(|v| v.trim().to_string()),
            None => Some(clean_text(&element.text().collect::<String>())),
        })
        .filter(|value| !value.is_empty())
        .collect()
}

/// Walk a chain and return the first strategy's first non-empty value.
pub fn first_value(scope: ElementRef, chain: &[Locator]) -> String {
    for locator in chain {
        if let Some(value) = locator_values(scope, locator).into_iter().next() {
            return value;
        }
    }
    String::new()
}

/// Walk a chain and return every value from the first strategy that matches
/// at least one element. Later strategies are fallbacks, not additions.
pub fn collect_values(scope: ElementRef, chain: &[Locator]) -> Vec<String> {
    for locator in chain {
        let values = locator_values(scope, locator);
        if !values.is_empty() {
            return values;
        }
    }
    Vec::new()
}

/// Walk specification-table locators and return label/value pairs from the
/// first table that yields any.
pub fn spec_pairs(scope: ElementRef, chain: &[SpecLocator]) -> HashMap<String, String> {
    for locator in chain {
        let (row_sel, label_sel, value_sel) = match (
            parse_selector(locator.row),
            parse_selector(locator.label),
            parse_selector(locator.value),
        ) {
            (Some(r), Some(l), Some(v)) => (r, l, v),
            _ => continue,
        };

        let mut pairs = HashMap::new();
        for row in scope.select(&row_sel) {
            let label = row
                .select(&label_sel)
                .next()
                .map(|e| clean_text(&e.text().collect::<String>()))
                .unwrap_or_default();
            let value = row
                .select(&value_sel)
                .next()
                .map(|e| clean_text(&e.text().collect::<String>()))
                .unwrap_or_default();
            if !label.is_empty() && !value.is_empty() {
                pairs.insert(label, value);
            }
        }
        if !pairs.is_empty() {
            return pairs;
        }
    }
    HashMap::new()
}
