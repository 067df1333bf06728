use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Failed to reach the dataset at {url} due to: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Dataset at {url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to decode the dataset body from {url} due to: {source}")]
    Decode { url: String, source: reqwest::Error },
}

pub struct TruckDataRepo {
    http_client: Client,
    dataset_url: String,
}

impl TruckDataRepo {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("foggy-fork-backend/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .context("Failed to build the upstream HTTP client")?;

        Ok(Self {
            http_client,
            dataset_url: config.dataset_url.clone(),
        })
    }

    pub fn dataset_url(&self) -> &str {
        &self.dataset_url
    }

    /// One fresh pull of the permit feed, decoded as a JSON array. No caching
    /// and no retries, the caller decides what a miss means. Individual
    /// records stay loosely typed; record validation happens downstream.
    pub async fn fetch_trucks(&self) -> Result<Vec<Value>, UpstreamError> {
        let response = self
            .http_client
            .get(&self.dataset_url)
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                url: self.dataset_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: self.dataset_url.clone(),
                status,
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|source| UpstreamError::Decode {
                url: self.dataset_url.clone(),
                source,
            })
    }
}
