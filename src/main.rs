use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::info;

use price_scout::{aggregate_prices, create_client, extract_product, fallback_search_links};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("price_scout=info".parse()?),
        )
        .init();

    let url = std::env::args()
        .nth(1)
        .context("Usage: price-scout <product-url>")?;

    let client = create_client()?;

    let product = match extract_product(&client, &url).await {
        Some(product) => product,
        None => bail!("No scrape available for {}", url),
    };

    info!(
        "Extracted {:?} from {} at {}",
        product.title, product.marketplace, product.price.current
    );

    let mut prices = aggregate_prices(
        &client,
        &product.title,
        &product.marketplace,
        product.price.current,
        &product.url,
    )
    .await;

    // No competing quote found: hand the reader search links instead.
    if prices.len() == 1 {
        prices.extend(fallback_search_links(&product.title, &product.marketplace));
    }

    let report = json!({
        "product": product,
        "prices": prices,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
