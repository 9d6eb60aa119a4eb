//! REST-backed implementation of the `DealStore` contract.

use crate::error::StoreError;
use crate::rows::{BlockDealRow, BulkDealRow};
use crate::DealStore;
use async_trait::async_trait;
use configuration::settings::StoreConfig;
use core_types::DateRange;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// A `DealStore` backed by the record store's REST API.
///
/// Each feed is a resource queried by inclusive date range; the server does
/// the filtering. Requests carry the configured API key header when one is
/// set.
#[derive(Clone)]
pub struct RestDealStore {
    client: reqwest::Client,
    base_url: String,
}

impl RestDealStore {
    pub fn new(config: &StoreConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            headers.insert("apikey", HeaderValue::from_str(key).expect("Invalid API key"));
        }

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("Failed to build reqwest client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        resource: &str,
        range: &DateRange,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(%url, start = %range.start, end = %range.end, "querying record store");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("start_date", range.start.to_string()),
                ("end_date", range.end.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Store(format!(
                "{resource} request failed with {status}: {body}"
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl DealStore for RestDealStore {
    async fn fetch_bulk_deals(&self, range: &DateRange) -> Result<Vec<BulkDealRow>, StoreError> {
        self.get_rows("bulk_deals", range).await
    }

    async fn fetch_block_deals(&self, range: &DateRange) -> Result<Vec<BlockDealRow>, StoreError> {
        self.get_rows("block_deals", range).await
    }
}
