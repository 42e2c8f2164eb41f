use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::models::{Marketplace, PriceObservation, RankedPrice, CURRENCY_INR};
use crate::ranking::rank_prices;
use crate::scrapers::{engine, ScraperRegistry, SiteScraper};

/// Global deadline for one concurrent search batch. The batch as a whole
/// races this timer; there are no per-operation timeouts.
pub const SEARCH_DEADLINE: Duration = Duration::from_secs(10);

/// One marketplace's search-and-extract operation. Implementations absorb
/// their own failures and answer `None`.
#[async_trait]
pub trait PriceSearch: Send + Sync {
    fn store_name(&self) -> &str;
    async fn search(&self, client: &Client, title: &str) -> Option<PriceObservation>;
}

struct MarketplaceSearch {
    scraper: Arc<dyn SiteScraper>,
}

#[async_trait]
impl PriceSearch for MarketplaceSearch {
    fn store_name(&self) -> &str {
        self.scraper.marketplace().display_name()
    }

    async fn search(&self, client: &Client, title: &str) -> Option<PriceObservation> {
        engine::search_price(self.scraper.as_ref(), client, title).await
    }
}

/// Fans one product title out to every searchable marketplace except the
/// source, under a single global deadline.
pub struct PriceAggregator {
    searchers: Vec<Arc<dyn PriceSearch>>,
    deadline: Duration,
}

impl PriceAggregator {
    pub fn new(registry: &ScraperRegistry) -> Self {
        let searchers = registry
            .searchable()
            .into_iter()
            .map(|scraper| Arc::new(MarketplaceSearch { scraper }) as Arc<dyn PriceSearch>)
            .collect();
        Self {
            searchers,
            deadline: SEARCH_DEADLINE,
        }
    }

    /// Custom search set and deadline; used by tests and callers with
    /// tighter latency budgets.
    pub fn with_searchers(searchers: Vec<Arc<dyn PriceSearch>>, deadline: Duration) -> Self {
        Self {
            searchers,
            deadline,
        }
    }

    /// Collect price observations for a title across marketplaces and rank
    /// them. The source marketplace's own observation always leads the list,
    /// so the result is never empty.
    pub async fn aggregate(
        &self,
        client: &Client,
        title: &str,
        source_store: &str,
        source_price: f64,
        source_url: &str,
    ) -> Vec<RankedPrice> {
        let mut observations = vec![PriceObservation::new(
            source_store,
            source_price,
            CURRENCY_INR,
            source_url,
        )];

        let mut handles: Vec<_> = self
            .searchers
            .iter()
            .filter(|s| !s.store_name().eq_ignore_ascii_case(source_store.trim()))
            .map(|searcher| {
                let searcher = Arc::clone(searcher);
                let client = client.clone();
                let title = title.to_string();
                tokio::spawn(async move { searcher.search(&client, &title).await })
            })
            .collect();

        info!(
            "Searching {} marketplaces for {:?} (excluding {})",
            handles.len(),
            title,
            source_store
        );

        match timeout(self.deadline, join_all(handles.iter_mut())).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(Some(observation)) if observation.price > 0.0 => {
                            observations.push(observation);
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Search task failed: {}", e),
                    }
                }
            }
            Err(_) => {
                // Global timeout: abandon the whole batch, even operations
                // that happened to finish. Abort cancels in-flight fetches so
                // stragglers cannot outlive the request.
                warn!(
                    "Price search deadline of {:?} elapsed, abandoning batch",
                    self.deadline
                );
                for handle in &handles {
                    handle.abort();
                }
            }
        }

        rank_prices(observations)
    }
}

/// Zero-price search-link placeholders for every searchable marketplace other
/// than the source. Callers append these when aggregation found no competing
/// quote; the ranker never marks them best and never assigns them savings.
pub fn fallback_search_links(title: &str, source_store: &str) -> Vec<RankedPrice> {
    let source = Marketplace::from_name(source_store);
    crate::models::ALL_MARKETPLACES
        .iter()
        .filter(|m| m.supports_search())
        .filter(|m| source != Some(**m))
        .map(|marketplace| RankedPrice {
            observation: PriceObservation::search_link(
                marketplace.display_name(),
                &marketplace.search_url(title),
                CURRENCY_INR,
            ),
            is_best_price: false,
            savings: None,
        })
        .collect()
}
