//! Marketplace product extraction and cross-store price aggregation.
//!
//! Routes a product URL to the matching marketplace scraper, walks per-site
//! ordered fallback chains over the fetched page to produce one normalized
//! product record, then fans out a concurrent, deadline-bounded price search
//! across the remaining marketplaces and ranks the quotes it finds.

use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::info;

pub mod aggregator;
pub mod error;
pub mod models;
pub mod parsers;
pub mod ranking;
pub mod scrapers;
pub mod utils;

pub use aggregator::{fallback_search_links, PriceAggregator, SEARCH_DEADLINE};
pub use error::ScrapeError;
pub use models::{
    Availability, Marketplace, NormalizedProduct, PriceObservation, RankedPrice,
};
pub use ranking::rank_prices;
pub use scrapers::{ScraperRegistry, SiteScraper};
pub use utils::http::create_client;

static REGISTRY: Lazy<ScraperRegistry> = Lazy::new(ScraperRegistry::new);

/// Extract a normalized product record from a marketplace URL.
///
/// `None` covers both "unsupported marketplace" (decided without a fetch) and
/// "fetch failed"; callers needing the distinction can re-derive support with
/// [`Marketplace::detect`]. A page that fetches but yields nothing still
/// produces a record with empty and zero fields.
pub async fn extract_product(client: &Client, url: &str) -> Option<NormalizedProduct> {
    let scraper = match REGISTRY.find(url) {
        Some(scraper) => scraper,
        None => {
            info!("Unsupported marketplace: {}", url);
            return None;
        }
    };
    scrapers::engine::extract(scraper.as_ref(), client, url).await
}

/// Aggregate comparable prices for a product title across every searchable
/// marketplace except the source, ranked with best-price and savings
/// annotations. Always returns at least one entry: the source's own price.
pub async fn aggregate_prices(
    client: &Client,
    title: &str,
    source_store: &str,
    source_price: f64,
    source_url: &str,
) -> Vec<RankedPrice> {
    PriceAggregator::new(&REGISTRY)
        .aggregate(client, title, source_store, source_price, source_url)
        .await
}
