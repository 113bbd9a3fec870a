use crate::error::FetchError;
use crate::parse::Args;
use crate::record::{Observation, PageResponse};
use log::info;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use std::env;
use std::time::Duration;

/// Display cap on observation field values per record.
pub const MAX_FIELDS_SHOWN: usize = 2;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_key: String,
    pub page_size: u32,
    pub max_pages: u32,
    pub base_url: String,
}

impl FetchConfig {
    pub fn new(
        api_key: Option<String>,
        page_size: u32,
        max_pages: u32,
        base_url: &str,
    ) -> Result<Self, FetchError> {
        let api_key = api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
            FetchError::Configuration("env var API_KEY must be supplied".to_string())
        })?;

        Ok(Self {
            api_key,
            page_size,
            max_pages,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn from_env(args: &Args) -> Result<Self, FetchError> {
        Self::new(
            env::var("API_KEY").ok(),
            args.page_size,
            args.max_pages,
            &args.base_url,
        )
    }
}

pub struct ObservationFetcher {
    client: Client,
    config: FetchConfig,
}

impl ObservationFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("wow-observations/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Walk the listing page by page, printing each record, until either the
    /// page cap is hit or the reported total is exhausted. Any failure aborts
    /// the whole run; pages already printed are not rolled back.
    pub async fn fetch_observations(&self) -> Result<(), FetchError> {
        let mut page = 1;
        let mut is_more_pages = true;

        while is_more_pages {
            println!("Processing page {}", page);
            let response = self.fetch_page(page).await?;
            info!(
                "Page {} returned {} of {} total results",
                page,
                response.results.len(),
                response.total_results
            );

            for record in &response.results {
                for line in render_observation(record) {
                    println!("{}", line);
                }
            }

            is_more_pages = has_more_pages(
                page,
                self.config.page_size,
                self.config.max_pages,
                response.total_results,
            );
            page += 1;
        }

        Ok(())
    }

    async fn fetch_page(&self, page: u32) -> Result<PageResponse, FetchError> {
        let url = format!(
            "{}/wow-observations?per_page={}&page={}",
            self.config.base_url, self.config.page_size, page
        );

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.config.api_key.as_str())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Transport { page, source })?;

        response
            .json::<PageResponse>()
            .await
            .map_err(|source| FetchError::Transport { page, source })
    }
}

/// Another page is requested only while both bounds hold: the hard page cap
/// and the server-reported total. The cap wins even if the server misreports
/// `total_results`, so the loop always terminates.
pub fn has_more_pages(page: u32, page_size: u32, max_pages: u32, total_results: u64) -> bool {
    page < max_pages && u64::from(page) * u64::from(page_size) < total_results
}

/// Console lines for one record: id, datetime, location (obscured rule),
/// species, then at most MAX_FIELDS_SHOWN field values in wire order.
pub fn render_observation(record: &Observation) -> Vec<String> {
    let mut lines = vec![format!("ID={}", record.id)];
    lines.push(format!(
        "  datetime={}",
        record.time_observed_at.as_deref().unwrap_or("")
    ));
    lines.push(format!(
        "  location={}",
        record.display_location().unwrap_or("")
    ));
    lines.push(format!(
        "  species={}",
        record.species_guess.as_deref().unwrap_or("")
    ));
    for field in record.ofvs.iter().take(MAX_FIELDS_SHOWN) {
        lines.push(format!("  {}={}", field.name, field.value));
    }
    lines
}
