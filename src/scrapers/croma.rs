use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SearchChains, SiteScraper, SpecLocator};

static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[Locator::Text("h1.pd-title"), Locator::Text(".pdp-title h1")],
    brand: &[
        Locator::Text(".pd-brand-name"),
        Locator::Text("ol.breadcrumb li:nth-child(2) a"),
    ],
    price: &[
        Locator::Text("span#pdp-product-price"),
        Locator::Text(".new-price .amount"),
        Locator::Text("span.amount"),
    ],
    original_price: &[Locator::Text("span#old-price"), Locator::Text(".old-price .amount")],
    images: &[
        Locator::Attr(".pd-carousel img", "data-src"),
        Locator::Attr(".carousel-item img", "src"),
    ],
    specifications: &[SpecLocator {
        row: ".cp-specification-spec-details li",
        label: ".cp-specification-spec-title",
        value: ".cp-specification-spec-value",
    }],
    rating_value: &[Locator::Text(".cp-rating .rating-text")],
    rating_count: &[Locator::Text(".cp-rating .review-text")],
    highlights: &[Locator::Text(".cp-keyfeature li")],
};

static SEARCH_CHAINS: SearchChains = SearchChains {
    result: "li.product-item",
    title: &[Locator::Text("h3.product-title a"), Locator::Text("h3.product-title")],
    price: &[Locator::Text("span.amount"), Locator::Text(".new-price")],
    link: &[Locator::Attr("h3.product-title a", "href")],
};

pub struct CromaScraper;

impl SiteScraper for CromaScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Croma
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }

    fn search_chains(&self) -> Option<&'static SearchChains> {
        Some(&SEARCH_CHAINS)
    }
}
