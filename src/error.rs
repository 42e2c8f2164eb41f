use thiserror::Error;

/// Transport-level failures: the only errors that make a scrape unavailable
/// (the extractor yields `None`). Parse problems never reach this type; they
/// are absorbed where they occur and degrade to empty or zero fields. Nothing
/// here is ever fatal to the host process.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },
}
