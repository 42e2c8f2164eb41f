use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SiteScraper, SpecLocator};

// AJIO search results are rendered client-side, so only product pages are
// extractable here.
static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[Locator::Text("h1.prod-name")],
    brand: &[Locator::Text("h2.brand-name")],
    price: &[Locator::Text("div.prod-sp"), Locator::Text(".prod-price-section .prod-sp")],
    original_price: &[Locator::Text("span.prod-cp")],
    images: &[
        Locator::Attr(".img-container img", "src"),
        Locator::Attr("img.rilrtl-lazy-img", "src"),
    ],
    specifications: &[SpecLocator {
        row: ".prod-list .mandatory-list-item",
        label: ".info-label",
        value: ".title",
    }],
    rating_value: &[Locator::Text("._3c9gD span:first-child"), Locator::Text(".prod-ratings")],
    rating_count: &[Locator::Text("._38RNg1")],
    highlights: &[Locator::Text(".prod-list-item"), Locator::Text(".detail-list li")],
};

pub struct AjioScraper;

impl SiteScraper for AjioScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Ajio
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }
}
