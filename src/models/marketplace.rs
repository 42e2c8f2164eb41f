use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a product title used to build a search query.
const SEARCH_QUERY_MAX_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    Amazon,
    Flipkart,
    Myntra,
    Ajio,
    Snapdeal,
    Croma,
}

pub const ALL_MARKETPLACES: [Marketplace; 6] = [
    Marketplace::Amazon,
    Marketplace::Flipkart,
    Marketplace::Myntra,
    Marketplace::Ajio,
    Marketplace::Snapdeal,
    Marketplace::Croma,
];

impl Marketplace {
    pub fn key(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "amazon",
            Marketplace::Flipkart => "flipkart",
            Marketplace::Myntra => "myntra",
            Marketplace::Ajio => "ajio",
            Marketplace::Snapdeal => "snapdeal",
            Marketplace::Croma => "croma",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "Amazon",
            Marketplace::Flipkart => "Flipkart",
            Marketplace::Myntra => "Myntra",
            Marketplace::Ajio => "AJIO",
            Marketplace::Snapdeal => "Snapdeal",
            Marketplace::Croma => "Croma",
        }
    }

    /// Substring of the host that identifies this marketplace in a URL.
    pub fn domain_token(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "amazon.",
            Marketplace::Flipkart => "flipkart.com",
            Marketplace::Myntra => "myntra.com",
            Marketplace::Ajio => "ajio.com",
            Marketplace::Snapdeal => "snapdeal.com",
            Marketplace::Croma => "croma.com",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "https://www.amazon.in",
            Marketplace::Flipkart => "https://www.flipkart.com",
            Marketplace::Myntra => "https://www.myntra.com",
            Marketplace::Ajio => "https://www.ajio.com",
            Marketplace::Snapdeal => "https://www.snapdeal.com",
            Marketplace::Croma => "https://www.croma.com",
        }
    }

    /// Whether the marketplace exposes a search-results page we can extract
    /// prices from. Myntra and AJIO render results client-side only.
    pub fn supports_search(&self) -> bool {
        matches!(
            self,
            Marketplace::Amazon | Marketplace::Flipkart | Marketplace::Snapdeal | Marketplace::Croma
        )
    }

    /// Search-results URL for a product title, truncated and percent-encoded.
    pub fn search_url(&self, title: &str) -> String {
        let query: String = title.chars().take(SEARCH_QUERY_MAX_LEN).collect();
        let encoded = utf8_percent_encode(query.trim(), NON_ALPHANUMERIC).to_string();
        match self {
            Marketplace::Amazon => format!("{}/s?k={}", self.base_url(), encoded),
            Marketplace::Flipkart => format!("{}/search?q={}", self.base_url(), encoded),
            Marketplace::Myntra => format!("{}/{}", self.base_url(), encoded),
            Marketplace::Ajio => format!("{}/search/?text={}", self.base_url(), encoded),
            Marketplace::Snapdeal => format!("{}/search?keyword={}", self.base_url(), encoded),
            Marketplace::Croma => format!("{}/searchB?q={}", self.base_url(), encoded),
        }
    }

    /// Classify a URL by its marketplace. Total over all registered
    /// marketplaces and order-independent: the longest matching domain token
    /// wins, so an ambiguous host resolves to the most specific marketplace.
    pub fn detect(url: &str) -> Option<Marketplace> {
        let url_lower = url.to_lowercase();
        ALL_MARKETPLACES
            .iter()
            .copied()
            .filter(|m| url_lower.contains(m.domain_token()))
            .max_by_key(|m| m.domain_token().len())
    }

    /// Case-insensitive lookup by key or display name.
    pub fn from_name(name: &str) -> Option<Marketplace> {
        let name_lower = name.trim().to_lowercase();
        ALL_MARKETPLACES
            .iter()
            .copied()
            .find(|m| m.key() == name_lower || m.display_name().to_lowercase() == name_lower)
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_marketplace_from_url() {
        assert_eq!(
            Marketplace::detect("https://www.amazon.in/dp/B0ABC12345"),
            Some(Marketplace::Amazon)
        );
        assert_eq!(
            Marketplace::detect("https://www.flipkart.com/some-product/p/itm123"),
            Some(Marketplace::Flipkart)
        );
        assert_eq!(Marketplace::detect("https://example.com/product/1"), None);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            Marketplace::detect("HTTPS://WWW.SNAPDEAL.COM/product/x/123"),
            Some(Marketplace::Snapdeal)
        );
    }

    #[test]
    fn from_name_matches_key_and_display_name() {
        assert_eq!(Marketplace::from_name("amazon"), Some(Marketplace::Amazon));
        assert_eq!(Marketplace::from_name("AJIO"), Some(Marketplace::Ajio));
        assert_eq!(Marketplace::from_name(" Flipkart "), Some(Marketplace::Flipkart));
        assert_eq!(Marketplace::from_name("ebay"), None);
    }

    #[test]
    fn search_url_encodes_and_truncates_query() {
        let long_title = "a".repeat(200);
        let url = Marketplace::Amazon.search_url(&long_title);
        assert!(url.starts_with("https://www.amazon.in/s?k="));
        assert!(url.len() < 200 + 26);

        let url = Marketplace::Flipkart.search_url("boAt Airdopes 141");
        assert_eq!(url, "https://www.flipkart.com/search?q=boAt%20Airdopes%20141");
    }

    #[test]
    fn searchable_subset_excludes_client_rendered_sites() {
        assert!(Marketplace::Amazon.supports_search());
        assert!(Marketplace::Croma.supports_search());
        assert!(!Marketplace::Myntra.supports_search());
        assert!(!Marketplace::Ajio.supports_search());
    }
}
