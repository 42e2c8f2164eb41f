use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SearchChains, SiteScraper, SpecLocator};

static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[Locator::Text("h1.pdp-e-i-head")],
    brand: &[Locator::Text(".pdp-e-i-brand a"), Locator::Text(".pdp-e-i-brand")],
    price: &[
        Locator::Text("span.payBlkBig"),
        Locator::Text(".pdp-final-price"),
    ],
    original_price: &[Locator::Text("span.pdpCutPrice")],
    images: &[
        Locator::Attr("#bx-slider-left-image-panel img", "src"),
        Locator::Attr("img.cloudzoom", "src"),
    ],
    specifications: &[SpecLocator {
        row: ".spec-body table tr",
        label: "td:nth-child(1)",
        value: "td:nth-child(2)",
    }],
    rating_value: &[Locator::Text(".pdp-e-i-ratings .avrg-rating")],
    rating_count: &[Locator::Text(".total-rating")],
    highlights: &[Locator::Text(".dtls-list li"), Locator::Text(".spec-section .h-content li")],
};

static SEARCH_CHAINS: SearchChains = SearchChains {
    result: "div.product-tuple-listing",
    title: &[Locator::Text("p.product-title")],
    price: &[Locator::Text("span.product-price"), Locator::Text("span.lfloat.product-price")],
    link: &[Locator::Attr("a.dp-widget-link", "href")],
};

pub struct SnapdealScraper;

impl SiteScraper for SnapdealScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Snapdeal
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }

    fn search_chains(&self) -> Option<&'static SearchChains> {
        Some(&SEARCH_CHAINS)
    }
}
