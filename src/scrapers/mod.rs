use std::sync::Arc;

use crate::models::Marketplace;

pub mod chains;
pub mod engine;

mod ajio;
mod amazon;
mod croma;
mod flipkart;
mod myntra;
mod snapdeal;

pub use ajio::AjioScraper;
pub use amazon::AmazonScraper;
pub use chains::{Locator, ProductChains, SearchChains, SpecLocator};
pub use croma::CromaScraper;
pub use flipkart::FlipkartScraper;
pub use myntra::MyntraScraper;
pub use snapdeal::SnapdealScraper;

/// Per-marketplace extraction capability. Concrete scrapers supply ordered
/// field-location tables; the algorithms live in `engine` and are shared.
pub trait SiteScraper: Send + Sync {
    fn marketplace(&self) -> Marketplace;

    fn product_chains(&self) -> &'static ProductChains;

    /// Strategy tables for the marketplace's search-results page, absent when
    /// the site has no crawlable search page.
    fn search_chains(&self) -> Option<&'static SearchChains> {
        None
    }

    /// Rewrite a thumbnail URL to its higher-resolution variant where the
    /// site encodes resolution in the URL.
    fn normalize_image_url(&self, url: &str) -> String {
        url.to_string()
    }

    fn can_handle(&self, url: &str) -> bool {
        url.to_lowercase()
            .contains(self.marketplace().domain_token())
    }
}

/// Fixed-order registry of every supported marketplace scraper.
pub struct ScraperRegistry {
    scrapers: Vec<Arc<dyn SiteScraper>>,
}

impl ScraperRegistry {
    pub fn new() -> Self {
        Self {
            scrapers: vec![
                Arc::new(AmazonScraper),
                Arc::new(FlipkartScraper),
                Arc::new(MyntraScraper),
                Arc::new(AjioScraper),
                Arc::new(SnapdealScraper),
                Arc::new(CromaScraper),
            ],
        }
    }

    /// Route a URL to its scraper. Classification is total and
    /// order-independent; returns `None` for unsupported marketplaces without
    /// touching the network.
    pub fn find(&self, url: &str) -> Option<Arc<dyn SiteScraper>> {
        let marketplace = Marketplace::detect(url)?;
        self.by_marketplace(marketplace)
    }

    pub fn by_marketplace(&self, marketplace: Marketplace) -> Option<Arc<dyn SiteScraper>> {
        self.scrapers
            .iter()
            .find(|s| s.marketplace() == marketplace)
            .cloned()
    }

    /// Scrapers that expose a search-results page, in registry order.
    pub fn searchable(&self) -> Vec<Arc<dyn SiteScraper>> {
        self.scrapers
            .iter()
            .filter(|s| s.marketplace().supports_search())
            .cloned()
            .collect()
    }
}

impl Default for ScraperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
