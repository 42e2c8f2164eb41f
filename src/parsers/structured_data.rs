use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

static JSON_LD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("Invalid JSON-LD selector")
});

/// Offer prices lifted from a page's embedded JSON-LD Product block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuredOffer {
    pub price: f64,
    pub original_price: Option<f64>,
}

/// Scan every JSON-LD script block for the first Product entry carrying an
/// offer, and return its prices. Malformed blocks are skipped. Used as a
/// lower-confidence fallback when DOM extraction finds no price: the DOM
/// shows the discount currently displayed, JSON-LD may lag behind it.
pub fn read_product_offer(document: &Html) -> Option<StructuredOffer> {
    for script in document.select(&JSON_LD_SELECTOR) {
        let raw = script.inner_html();
        if raw.trim().is_empty() {
            continue;
        }
        let value: Value = match serde_json::from_str(raw.trim()) {
            Ok(v) => v,
            Err(e) => {
                debug!("Skipping malformed JSON-LD block: {}", e);
                continue;
            }
        };
        if let Some(offer) = find_product_offer(&value) {
            return Some(offer);
        }
    }
    None
}

fn find_product_offer(value: &Value) -> Option<StructuredOffer> {
    match value {
        Value::Array(items) => items.iter().find_map(find_product_offer),
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph") {
                if let Some(offer) = find_product_offer(graph) {
                    return Some(offer);
                }
            }
            if !is_product_type(map.get("@type")) {
                return None;
            }
            let offers = map.get("offers")?;
            let first = match offers {
                Value::Array(items) => items.first()?,
                other => other,
            };
            let price = json_number(first.get("price"))
                .or_else(|| json_number(first.get("lowPrice")))?;
            let original_price = json_number(first.get("highPrice")).filter(|&p| p > price);
            Some(StructuredOffer {
                price,
                original_price,
            })
        }
        _ => None,
    }
}

/// "@type" may be a single string or a list of types.
fn is_product_type(type_val: Option<&Value>) -> bool {
    match type_val {
        Some(Value::String(s)) => s == "Product",
        Some(Value::Array(items)) => items
            .iter()
            .any(|t| t.as_str().map(|s| s == "Product").unwrap_or(false)),
        _ => false,
    }
}

/// JSON-LD prices appear both as numbers and as strings.
fn json_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let parsed = crate::parsers::parse_price_text(s);
            (parsed > 0.0).then_some(parsed)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><head>{}</head><body></body></html>", body))
    }

    #[test]
    fn reads_single_product_object() {
        let html = doc(
            r#"<script type="application/ld+json">
            {"@type": "Product", "name": "Phone", "offers": {"price": "12999", "highPrice": "15999"}}
            </script>"#,
        );
        let offer = read_product_offer(&html).unwrap();
        assert_eq!(offer.price, 12999.0);
        assert_eq!(offer.original_price, Some(15999.0));
    }

    #[test]
    fn reads_product_from_array_and_offer_array() {
        let html = doc(
            r#"<script type="application/ld+json">
            [{"@type": "BreadcrumbList"},
             {"@type": ["Thing", "Product"], "offers": [{"price": 499.5}, {"price": 600}]}]
            </script>"#,
        );
        let offer = read_product_offer(&html).unwrap();
        assert_eq!(offer.price, 499.5);
        assert_eq!(offer.original_price, None);
    }

    #[test]
    fn falls_back_to_low_price() {
        let html = doc(
            r#"<script type="application/ld+json">
            {"@type": "Product", "offers": {"@type": "AggregateOffer", "lowPrice": 999, "highPrice": 1299}}
            </script>"#,
        );
        let offer = read_product_offer(&html).unwrap();
        assert_eq!(offer.price, 999.0);
        assert_eq!(offer.original_price, Some(1299.0));
    }

    #[test]
    fn reads_product_inside_graph() {
        let html = doc(
            r#"<script type="application/ld+json">
            {"@graph": [{"@type": "WebSite"}, {"@type": "Product", "offers": {"price": 250}}]}
            </script>"#,
        );
        assert_eq!(read_product_offer(&html).unwrap().price, 250.0);
    }

    #[test]
    fn skips_malformed_blocks() {
        let html = doc(
            r#"<script type="application/ld+json">{not json</script>
            <script type="application/ld+json">
            {"@type": "Product", "offers": {"price": 42}}
            </script>"#,
        );
        assert_eq!(read_product_offer(&html).unwrap().price, 42.0);
    }

    #[test]
    fn ignores_pages_without_product_offers() {
        let html = doc(
            r#"<script type="application/ld+json">{"@type": "Organization", "name": "Shop"}</script>
            <script type="application/ld+json">{"@type": "Product", "name": "No offer here"}</script>"#,
        );
        assert_eq!(read_product_offer(&html), None);
    }

    #[test]
    fn high_price_not_above_price_is_dropped() {
        let html = doc(
            r#"<script type="application/ld+json">
            {"@type": "Product", "offers": {"price": 1000, "highPrice": 1000}}
            </script>"#,
        );
        let offer = read_product_offer(&html).unwrap();
        assert_eq!(offer.original_price, None);
    }
}
