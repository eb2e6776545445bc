//! HTTP client for the block explorer's account endpoints.
//!
//! The explorer pages its results; both fetchers walk pages until a short
//! page signals the end of the history, throttling between requests.

use super::types::{Envelope, InternalTransaction, Transaction};
use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, DEFAULT_PAGE_SIZE, PAGE_THROTTLE};
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

/// Client for paginated account-history queries
pub struct ExplorerClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    page_size: usize,
}

impl ExplorerClient {
    /// Create a new explorer client
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the records-per-page count
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetch the full external transaction history of `address`
    pub fn account_transactions(&self, address: &str) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_all_pages("txlist", address)
    }

    /// Fetch the full internal transaction history of `address`
    pub fn account_internal_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<InternalTransaction>, ApiError> {
        self.fetch_all_pages("txlistinternal", address)
    }

    /// Walk pages until a short page ends the history
    fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        action: &str,
        address: &str,
    ) -> Result<Vec<T>, ApiError> {
        let mut records: Vec<T> = Vec::new();
        let mut page: usize = 1;

        info!("Fetching {} history for {}", action, address);

        loop {
            let batch = self.fetch_page::<T>(action, address, page)?;
            let batch_len = batch.len();
            records.extend(batch);

            debug!("{} page {}: {} records", action, page, batch_len);

            // A short page is the last one
            if batch_len < self.page_size {
                break;
            }

            page += 1;
            std::thread::sleep(PAGE_THROTTLE);
        }

        info!("{}: {} records over {} page(s)", action, records.len(), page);
        Ok(records)
    }

    fn fetch_page<T: DeserializeOwned>(
        &self,
        action: &str,
        address: &str,
        page: usize,
    ) -> Result<Vec<T>, ApiError> {
        let page_str = page.to_string();
        let offset_str = self.page_size.to_string();

        let mut query: Vec<(&str, &str)> = vec![
            ("module", "account"),
            ("action", action),
            ("address", address),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("page", &page_str),
            ("offset", &offset_str),
            ("sort", "asc"),
        ];
        if let Some(key) = &self.api_key {
            query.push(("apikey", key));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .map_err(ApiError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(ApiError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let envelope: Envelope = response.json().map_err(ApiError::RequestFailed)?;
        envelope.into_records()
    }
}
