use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("Invalid numeric token regex"));

static COUNT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*([km]?)").expect("Invalid count token regex"));

/// Words and symbols that precede or label a price and must not be mistaken
/// for part of the number.
const PRICE_PREFIXES: &[&str] = &["M.R.P.", "MRP", "Rs.", "Rs", "INR", "₹", "$", "€", ":"];

/// Parse a locale-formatted price string into a numeric value.
///
/// Handles currency symbols, "MRP"/"Rs" style prefixes, and both Western
/// (1,234,567) and lakh/crore (12,34,567) grouping, which both reduce to
/// removing every comma. The first contiguous numeric token in the cleaned
/// string is taken and rounded to 2 fractional digits.
///
/// Returns 0.0 when no number is present. A missing price and a literal zero
/// price are therefore indistinguishable; downstream ranking treats 0 as
/// "unknown".
pub fn parse_price_text(text: &str) -> f64 {
    let mut cleaned = text.to_string();
    for prefix in PRICE_PREFIXES {
        cleaned = cleaned.replace(prefix, " ");
    }
    let cleaned = cleaned.replace(',', "");

    match NUMERIC_TOKEN.find(&cleaned) {
        Some(token) => match token.as_str().parse::<f64>() {
            Ok(value) => (value * 100.0).round() / 100.0,
            Err(_) => 0.0,
        },
        None => 0.0,
    }
}

/// Parse a rating-count string with an optional k/m suffix multiplier,
/// e.g. "1.2K ratings" -> 1200. Returns 0 on no match.
pub fn parse_count_text(text: &str) -> u64 {
    let cleaned = text.replace(',', "");
    match COUNT_TOKEN.captures(cleaned.trim()) {
        Some(caps) => {
            let value: f64 = match caps[1].parse() {
                Ok(v) => v,
                Err(_) => return 0,
            };
            let multiplier = match caps[2].to_lowercase().as_str() {
                "k" => 1_000.0,
                "m" => 1_000_000.0,
                _ => 1.0,
            };
            (value * multiplier).round() as u64
        }
        None => 0,
    }
}
