//! Settings store abstraction and the HTTP implementation.
//!
//! The TUI and the one-shot CLI commands only ever talk to the
//! [`SettingsStore`] trait, so tests and development mode can swap in a
//! fixture-backed store.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use crate::settings::{Partition, SettingsNode, SettingsTree};

const SETTINGS_PATH: &str = "/api/v1/settings";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{message} (status {status_code})")]
    Api { message: String, status_code: u16 },
}

/// Async access to the settings tree, implemented by the HTTP client and by
/// the fixture-backed mock store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch the full two-partition tree.
    async fn fetch(&self) -> Result<SettingsTree, StoreError>;

    /// Persist one category. The server acknowledges with a bare
    /// success/failure status; no body is read back.
    async fn update(
        &self,
        partition: Partition,
        category: &str,
        node: &SettingsNode,
    ) -> Result<(), StoreError>;
}

/// Settings store backed by the dispatch server's HTTP API.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// The update payload: `{"<partition>": {"<category>": <node>}}`.
pub fn update_payload(
    partition: Partition,
    category: &str,
    node: &SettingsNode,
) -> serde_json::Value {
    json!({ (partition.wire_name()): { (category): node } })
}

#[async_trait]
impl SettingsStore for HttpStore {
    async fn fetch(&self) -> Result<SettingsTree, StoreError> {
        let resp = self.client.get(self.url(SETTINGS_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Api {
                message: "failed to load settings".to_string(),
                status_code: status.as_u16(),
            });
        }
        Ok(resp.json::<SettingsTree>().await?)
    }

    async fn update(
        &self,
        partition: Partition,
        category: &str,
        node: &SettingsNode,
    ) -> Result<(), StoreError> {
        let body = update_payload(partition, category, node);
        let resp = self
            .client
            .post(self.url(SETTINGS_PATH))
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            tracing::info!("Updated {}/{}", partition.wire_name(), category);
            Ok(())
        } else {
            Err(StoreError::Api {
                message: format!("update of {} rejected", category),
                status_code: status.as_u16(),
            })
        }
    }
}
