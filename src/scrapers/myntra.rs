use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SiteScraper, SpecLocator};

// Myntra renders search results client-side only, so it carries no search
// chains and never joins the price fan-out.
static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[Locator::Text("h1.pdp-name")],
    brand: &[Locator::Text("h1.pdp-title")],
    price: &[
        Locator::Text("span.pdp-price strong"),
        Locator::Text(".pdp-price"),
    ],
    original_price: &[Locator::Text("span.pdp-mrp s"), Locator::Text(".pdp-mrp")],
    images: &[
        Locator::Attr(".image-grid-imageContainer img", "src"),
        Locator::Attr("img.img-responsive", "src"),
    ],
    specifications: &[SpecLocator {
        row: ".index-tableContainer .index-row",
        label: ".index-rowKey",
        value: ".index-rowValue",
    }],
    rating_value: &[Locator::Text(".index-overallRating > div:first-child")],
    rating_count: &[Locator::Text(".index-ratingsCount")],
    highlights: &[Locator::Text(".pdp-product-description-content li")],
};

pub struct MyntraScraper;

impl SiteScraper for MyntraScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Myntra
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }
}
