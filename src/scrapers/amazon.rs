use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SearchChains, SiteScraper, SpecLocator};

/// Amazon encodes thumbnail resolution in a `._SX300_`-style URL segment.
static SIZE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\._[A-Za-z0-9,_]+_\.").expect("Invalid Amazon size-segment regex"));

static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[Locator::Text("#productTitle"), Locator::Text("#title span")],
    brand: &[
        Locator::Text("#bylineInfo"),
        Locator::Text(".po-brand .po-break-word"),
    ],
    price: &[
        Locator::Text("#corePrice_feature_div .a-price .a-offscreen"),
        Locator::Text("#priceblock_ourprice"),
        Locator::Text("#priceblock_dealprice"),
        Locator::Text(".a-price .a-offscreen"),
    ],
    original_price: &[
        Locator::Text("#corePrice_feature_div .a-text-price .a-offscreen"),
        Locator::Text(".a-text-price .a-offscreen"),
    ],
    images: &[
        Locator::Attr("#altImages img", "src"),
        Locator::Attr("#landingImage", "src"),
        Locator::Attr("#imgTagWrapperId img", "src"),
    ],
    specifications: &[
        SpecLocator {
            row: "#productDetails_techSpec_section_1 tr",
            label: "th",
            value: "td",
        },
        SpecLocator {
            row: "#productDetails_detailBullets_sections1 tr",
            label: "th",
            value: "td",
        },
        SpecLocator {
            row: ".a-expander-content table.a-keyvalue tr",
            label: "th",
            value: "td",
        },
    ],
    rating_value: &[
        Locator::Text("#acrPopover span.a-icon-alt"),
        Locator::Text(".a-icon-star span.a-icon-alt"),
    ],
    rating_count: &[Locator::Text("#acrCustomerReviewText")],
    highlights: &[
        Locator::Text("#feature-bullets li span.a-list-item"),
        Locator::Text("#productFactsDesktopExpander li span.a-list-item"),
    ],
};

static SEARCH_CHAINS: SearchChains = SearchChains {
    result: "[data-component-type='s-search-result']",
    title: &[Locator::Text("h2 a span"), Locator::Text("h2 span")],
    price: &[
        Locator::Text(".a-price .a-offscreen"),
        Locator::Text(".a-price-whole"),
    ],
    link: &[
        Locator::Attr("h2 a", "href"),
        Locator::Attr("a.a-link-normal", "href"),
    ],
};

pub struct AmazonScraper;

impl SiteScraper for AmazonScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Amazon
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }

    fn search_chains(&self) -> Option<&'static SearchChains> {
        Some(&SEARCH_CHAINS)
    }

    fn normalize_image_url(&self, url: &str) -> String {
        SIZE_SEGMENT.replace(url, "._SL1200_.").to_string()
    }
}
