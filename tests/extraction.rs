use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use price_scout::create_client;
use price_scout::models::{Availability, Marketplace, FALLBACK_TITLE};
use price_scout::scrapers::{engine, ScraperRegistry};

const SNAPDEAL_PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>x</title></head><body>
  <h1 class="pdp-e-i-head">Aqua Kent RO Water Purifier</h1>
  <div class="pdp-e-i-brand"><a>Kent</a></div>
  <span class="payBlkBig">₹12,499</span>
  <span class="pdpCutPrice">₹15,999</span>
  <div id="bx-slider-left-image-panel">
    <img src="https://n1.sdlcdn.com/imgs/a/purifier-1.jpg">
    <img src="https://n1.sdlcdn.com/imgs/a/purifier-2.jpg">
    <img src="https://n1.sdlcdn.com/imgs/a/purifier-1.jpg">
    <img src="https://n1.sdlcdn.com/imgs/loading-spinner.gif">
  </div>
  <div class="pdp-e-i-ratings"><span class="avrg-rating">4.2</span></div>
  <span class="total-rating">1.2K ratings</span>
  <ul class="dtls-list">
    <li>20 litre storage tank with UV disinfection</li>
    <li>short</li>
    <li>Wall mountable design suits Indian kitchens</li>
  </ul>
  <div class="spec-body"><table>
    <tr><td>Capacity</td><td>20 L</td></tr>
    <tr><td>Warranty</td><td>1 Year</td></tr>
  </table></div>
</body></html>"#;

const JSONLD_ONLY_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
  <script type="application/ld+json">{broken</script>
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Product",
     "name": "Aqua Kent RO Water Purifier",
     "offers": {"@type": "Offer", "price": "11999.00", "highPrice": "14999.00"}}
  </script>
</head><body>
  <h1 class="pdp-e-i-head">Aqua Kent RO Water Purifier</h1>
</body></html>"#;

const SNAPDEAL_SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="product-tuple-listing">
    <a class="dp-widget-link" href="/product/aqua-kent-ro/111"></a>
    <p class="product-title">Aqua Kent RO Water Purifier 20 L</p>
    <span class="product-price">Rs. 11,499</span>
    <span class="stock-msg">Only 2 left</span>
  </div>
  <div class="product-tuple-listing">
    <a class="dp-widget-link" href="/product/other-purifier/222"></a>
    <p class="product-title">Other Purifier</p>
    <span class="product-price">Rs. 9,999</span>
  </div>
</body></html>"#;

const SNAPDEAL_PRICELESS_SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="product-tuple-listing">
    <p class="product-title">Listing without a quote</p>
  </div>
</body></html>"#;

async fn serve(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn extracts_full_product_record_from_fetched_page() {
    let server = MockServer::start().await;
    serve(&server, "/product/purifier/123", SNAPDEAL_PRODUCT_PAGE).await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();
    let url = format!("{}/product/purifier/123", server.uri());

    let product = engine::extract(scraper.as_ref(), &client, &url)
        .await
        .expect("fetch succeeded, record expected");

    assert_eq!(product.title, "Aqua Kent RO Water Purifier");
    assert_eq!(product.brand, "Kent");
    assert_eq!(product.price.current, 12499.0);
    assert_eq!(product.price.original, Some(15999.0));
    assert_eq!(product.marketplace, "Snapdeal");

    // Deduplicated, spinner asset dropped.
    assert_eq!(
        product.images,
        vec![
            "https://n1.sdlcdn.com/imgs/a/purifier-1.jpg",
            "https://n1.sdlcdn.com/imgs/a/purifier-2.jpg",
        ]
    );

    assert_eq!(product.ratings.average, 4.2);
    assert_eq!(product.ratings.count, 1200);

    // Length filter drops the five-character bullet.
    assert_eq!(product.highlights.len(), 2);

    assert_eq!(product.specifications["Capacity"], "20 L");
    assert_eq!(product.specifications["Warranty"], "1 Year");
}

#[tokio::test]
async fn falls_back_to_structured_data_when_dom_price_missing() {
    let server = MockServer::start().await;
    serve(&server, "/product/purifier/456", JSONLD_ONLY_PAGE).await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();
    let url = format!("{}/product/purifier/456", server.uri());

    let product = engine::extract(scraper.as_ref(), &client, &url).await.unwrap();

    assert_eq!(product.price.current, 11999.0);
    assert_eq!(product.price.original, Some(14999.0));
}

#[tokio::test]
async fn search_results_read_only_the_first_card() {
    let server = MockServer::start().await;
    serve(&server, "/search", SNAPDEAL_SEARCH_PAGE).await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();
    let search_url = format!("{}/search?keyword=aqua+kent", server.uri());

    let observation = engine::search_price_at(scraper.as_ref(), &client, &search_url)
        .await
        .expect("first card carries a price");

    assert_eq!(observation.store, "Snapdeal");
    // The cheaper second card must not win: only the first card is read.
    assert_eq!(observation.price, 11499.0);
    assert_eq!(
        observation.matched_title.as_deref(),
        Some("Aqua Kent RO Water Purifier 20 L")
    );
    // Relative result link resolves against the marketplace base, not the
    // search page host.
    assert_eq!(
        observation.url,
        "https://www.snapdeal.com/product/aqua-kent-ro/111"
    );
    assert_eq!(observation.availability, Availability::Limited);
}

#[tokio::test]
async fn priceless_search_results_yield_none() {
    let server = MockServer::start().await;
    serve(&server, "/search-no-price", SNAPDEAL_PRICELESS_SEARCH_PAGE).await;
    serve(&server, "/search-empty", "<html><body><p>No results found</p></body></html>").await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();

    let url = format!("{}/search-no-price", server.uri());
    assert!(engine::search_price_at(scraper.as_ref(), &client, &url).await.is_none());

    let url = format!("{}/search-empty", server.uri());
    assert!(engine::search_price_at(scraper.as_ref(), &client, &url).await.is_none());
}

#[tokio::test]
async fn fetch_failure_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();
    let url = format!("{}/product/gone/789", server.uri());

    assert!(engine::extract(scraper.as_ref(), &client, &url).await.is_none());
}

#[tokio::test]
async fn unextractable_page_still_returns_a_record() {
    let server = MockServer::start().await;
    serve(&server, "/product/blank/1", "<html><body><p>nothing here</p></body></html>").await;

    let registry = ScraperRegistry::new();
    let scraper = registry.by_marketplace(Marketplace::Snapdeal).unwrap();
    let client = create_client().unwrap();
    let url = format!("{}/product/blank/1", server.uri());

    let product = engine::extract(scraper.as_ref(), &client, &url)
        .await
        .expect("successful fetch must not be dropped");

    assert_eq!(product.title, FALLBACK_TITLE);
    assert_eq!(product.price.current, 0.0);
    assert!(product.images.is_empty());
    assert!(product.specifications.is_empty());
}
