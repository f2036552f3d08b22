//! Statistical Office of the Republic of Serbia open-data endpoint.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::AppError;

/// Agricultural producer prices, yearly (dataset `0306IND01`).
pub const DATASET_URL: &str =
    "https://opendata.stat.gov.rs/data/WcfJsonRestService.Service1.svc/dataset/0306IND01/2/json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves a raw response body.
///
/// The pipeline only depends on this trait, so tests can feed canned payloads
/// without a network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

/// Blocking HTTP fetcher: one `GET`, no retries, fixed timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("agri-prices/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        log::info!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Network(format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Network(format!(
                "Request to {url} failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;
        log::info!("received {} bytes", body.len());

        Ok(body.to_vec())
    }
}
