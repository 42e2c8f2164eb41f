use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info};
use url::Url;

use crate::models::{
    Availability, NormalizedProduct, PriceInfo, PriceObservation, Ratings, CURRENCY_INR,
};
use crate::parsers::{parse_count_text, parse_price_text, read_product_offer};
use crate::scrapers::chains::{collect_values, first_value, spec_pairs};
use crate::scrapers::SiteScraper;
use crate::utils::http::fetch_page;

/// Asset URL fragments that mark spinners and placeholder images rather than
/// product photography.
const PLACEHOLDER_ASSET_TOKENS: &[&str] = &[
    "placeholder",
    "spinner",
    "loading",
    "grey-pixel",
    "pixel.gif",
    "transparent.gif",
    "data:image",
];

/// Fetch a product page and run the site's field chains over it.
///
/// Returns `None` only when the fetch itself fails; a page that fetches but
/// yields no extractable fields still produces a record with empty and zero
/// fields. A successful fetch is never silently dropped.
pub async fn extract(
    scraper: &dyn SiteScraper,
    client: &Client,
    url: &str,
) -> Option<NormalizedProduct> {
    let marketplace = scraper.marketplace();
    info!("Extracting {} product page: {}", marketplace, url);

    let html = match fetch_page(client, url).await {
        Ok(html) => html,
        Err(e) => {
            error!("No scrape available for {}: {}", url, e);
            return None;
        }
    };

    Some(extract_from_html(scraper, &html, url))
}

/// The one extraction algorithm shared by all marketplaces: per field, walk
/// the site's ordered strategy chain and stop at the first non-empty hit.
pub fn extract_from_html(scraper: &dyn SiteScraper, html: &str, url: &str) -> NormalizedProduct {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let chains = scraper.product_chains();
    let marketplace = scraper.marketplace();

    let mut product = NormalizedProduct::empty(url, marketplace.display_name(), CURRENCY_INR);

    product.set_title(&first_value(root, chains.title));
    product.brand = first_value(root, chains.brand);

    let mut current = parse_price_text(&first_value(root, chains.price));
    let mut original = parse_price_text(&first_value(root, chains.original_price));

    // DOM-visible prices reflect the discount displayed right now; embedded
    // structured data is consulted only when every DOM strategy came up empty.
    if current == 0.0 {
        if let Some(offer) = read_product_offer(&document) {
            current = offer.price;
            if original == 0.0 {
                original = offer.original_price.unwrap_or(0.0);
            }
        }
    }
    product.price = PriceInfo::new(current, (original > 0.0).then_some(original), CURRENCY_INR);

    for raw in collect_values(root, chains.images) {
        if is_placeholder_asset(&raw) {
            continue;
        }
        if let Some(resolved) = resolve_url(marketplace.base_url(), &raw) {
            product.push_image(scraper.normalize_image_url(&resolved));
        }
    }

    product.specifications = spec_pairs(root, chains.specifications);

    let average = parse_price_text(&first_value(root, chains.rating_value));
    let count = parse_count_text(&first_value(root, chains.rating_count));
    product.ratings = Ratings::new(average, count);

    for highlight in collect_values(root, chains.highlights) {
        product.push_highlight(highlight);
    }

    product
}

/// Search a marketplace's results page for a title and read the first result
/// card's price. Every failure path resolves to `None`.
pub async fn search_price(
    scraper: &dyn SiteScraper,
    client: &Client,
    title: &str,
) -> Option<PriceObservation> {
    let marketplace = scraper.marketplace();
    let search_url = marketplace.search_url(title);
    info!("Searching {} for {:?}", marketplace, title);
    search_price_at(scraper, client, &search_url).await
}

/// Fetch one search-results page and read the first result card. Only the
/// first card is considered; a card without a positive price yields `None`.
pub async fn search_price_at(
    scraper: &dyn SiteScraper,
    client: &Client,
    search_url: &str,
) -> Option<PriceObservation> {
    let chains = scraper.search_chains()?;
    let marketplace = scraper.marketplace();

    let html = match fetch_page(client, search_url).await {
        Ok(html) => html,
        Err(e) => {
            error!("Search fetch failed on {}: {}", marketplace, e);
            return None;
        }
    };

    let document = Html::parse_document(&html);
    let result_selector = Selector::parse(chains.result).ok()?;
    let card = document.select(&result_selector).next()?;

    let price = parse_price_text(&first_value(card, chains.price));
    if price <= 0.0 {
        return None;
    }

    let link = first_value(card, chains.link);
    let result_url =
        resolve_url(marketplace.base_url(), &link).unwrap_or_else(|| search_url.to_string());
    let matched_title = Some(first_value(card, chains.title)).filter(|t| !t.is_empty());

    let mut observation =
        PriceObservation::new(marketplace.display_name(), price, CURRENCY_INR, &result_url);
    observation.availability = sniff_availability(&card.text().collect::<String>());
    observation.matched_title = matched_title;
    Some(observation)
}

pub fn is_placeholder_asset(url: &str) -> bool {
    let url_lower = url.to_lowercase();
    PLACEHOLDER_ASSET_TOKENS
        .iter()
        .any(|token| url_lower.contains(token))
}

/// Resolve a possibly relative or protocol-relative URL against the
/// marketplace's base.
pub fn resolve_url(base: &str, raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let base = Url::parse(base).ok()?;
    base.join(raw).ok().map(|u| u.to_string())
}

fn sniff_availability(card_text: &str) -> Availability {
    let text = card_text.to_lowercase();
    if text.contains("out of stock") || text.contains("sold out") || text.contains("unavailable") {
        Availability::OutOfStock
    } else if text.contains("only") && text.contains("left") || text.contains("limited stock") {
        Availability::Limited
    } else {
        Availability::InStock
    }
}
