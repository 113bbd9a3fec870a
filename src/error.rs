use thiserror::Error;

/// Every failure aborts the whole fetch. Decoding failures surface through
/// the `Transport` variant since reqwest reports them as body errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to fetch page {page}: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
}
