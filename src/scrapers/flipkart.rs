use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Marketplace;
use crate::scrapers::{Locator, ProductChains, SearchChains, SiteScraper, SpecLocator};

/// Flipkart CDN paths carry the rendered resolution, e.g. `/image/128/128/`.
static RESOLUTION_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d{2,4}/\d{2,4}/").expect("Invalid Flipkart resolution regex"));

static PRODUCT_CHAINS: ProductChains = ProductChains {
    title: &[
        Locator::Text("span.B_NuCI"),
        Locator::Text("h1.yhB1nd"),
        Locator::Text("h1"),
    ],
    brand: &[Locator::Text("span.G6XhRU")],
    price: &[
        Locator::Text("div._30jeq3._16Jk6d"),
        Locator::Text("div._30jeq3"),
    ],
    original_price: &[Locator::Text("div._3I9_wc._2p6lqe"), Locator::Text("div._3I9_wc")],
    images: &[
        Locator::Attr("img._396cs4", "src"),
        Locator::Attr("img._2r_T1I", "src"),
        Locator::Attr("ul._3GnUWp img", "src"),
    ],
    specifications: &[SpecLocator {
        row: "table._14cfVK tr._1s_Smc",
        label: "td._1hKmbr",
        value: "td.URwL2w",
    }],
    rating_value: &[Locator::Text("div._3LWZlK")],
    rating_count: &[Locator::Text("span._2_R_DZ span"), Locator::Text("span._2_R_DZ")],
    highlights: &[Locator::Text("div._2418kt li._21Ahn-")],
};

static SEARCH_CHAINS: SearchChains = SearchChains {
    result: "div._13oc-S, div._1AtVbE div._4ddWXP, div._1AtVbE div._1xHGtK",
    title: &[
        Locator::Text("div._4rR01T"),
        Locator::Text("a.s1Q9rs"),
        Locator::Text("a.IRpwTa"),
    ],
    price: &[Locator::Text("div._30jeq3")],
    link: &[
        Locator::Attr("a._1fQZEK", "href"),
        Locator::Attr("a.s1Q9rs", "href"),
        Locator::Attr("a.IRpwTa", "href"),
    ],
};

pub struct FlipkartScraper;

impl SiteScraper for FlipkartScraper {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Flipkart
    }

    fn product_chains(&self) -> &'static ProductChains {
        &PRODUCT_CHAINS
    }

    fn search_chains(&self) -> Option<&'static SearchChains> {
        Some(&SEARCH_CHAINS)
    }

    fn normalize_image_url(&self, url: &str) -> String {
        RESOLUTION_SEGMENT.replace(url, "/832/832/").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_resolution_path_is_upsized() {
        let scraper = FlipkartScraper;
        assert_eq!(
            scraper.normalize_image_url("https://rukminim2.flixcart.com/image/128/128/headphone/a.jpg"),
            "https://rukminim2.flixcart.com/image/832/832/headphone/a.jpg"
        );
        assert_eq!(
            scraper.normalize_image_url("https://rukminim2.flixcart.com/image/312/312/shoe/b.jpg"),
            "https://rukminim2.flixcart.com/image/832/832/shoe/b.jpg"
        );
    }

    #[test]
    fn urls_without_resolution_segment_pass_through() {
        let scraper = FlipkartScraper;
        assert_eq!(
            scraper.normalize_image_url("https://rukminim2.flixcart.com/image/a.jpg"),
            "https://rukminim2.flixcart.com/image/a.jpg"
        );
    }
}
