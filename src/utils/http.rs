use crate::error::ScrapeError;
use anyhow::Result;
use rand::Rng;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, warn};

/// User agents for rotation; marketplaces throttle repeat identities.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

pub fn create_client() -> Result<Client> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(20))
        .pool_max_idle_per_host(6)
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    Ok(client)
}

fn random_user_agent() -> &'static str {
    let index = rand::thread_rng().gen_range(0..USER_AGENTS.len());
    USER_AGENTS[index]
}

/// Fetch one page as text. Single attempt, no retry; callers degrade to
/// "no scrape available" on failure rather than backing off.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    debug!("Fetching {}", url);

    let response = client
        .get(url)
        .header("User-Agent", random_user_agent())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-IN,en;q=0.9")
        .header("DNT", "1")
        .header("Upgrade-Insecure-Requests", "1")
        .send()
        .await
        .map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(ScrapeError::Http {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| ScrapeError::Transport {
        url: url.to_string(),
        source,
    })
}
