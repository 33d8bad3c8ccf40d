//! Upstash-compatible REST key-value store (the protocol behind Vercel KV)
//!
//! Values are stored JSON-encoded, so records written by other Vercel KV
//! clients (`"\"1234\""`) read back as plain strings.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::store::KeyValueStore;
use crate::core::KvConfig;

#[derive(Debug, Deserialize)]
struct KvReply {
    #[serde(default)]
    result: Value,
    error: Option<String>,
}

#[derive(Clone)]
pub struct RestKvStore {
    http: Client,
    url: String,
    token: String,
}

impl RestKvStore {
    pub fn new(config: &KvConfig) -> Self {
        Self {
            http: Client::new(),
            url: config.url.clone(),
            token: config.token.clone(),
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder, command: &str) -> Result<Value> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("Failed to reach KV store for {command}"))?;

        let status = response.status();
        let reply: KvReply = response
            .json()
            .await
            .with_context(|| format!("KV {command} returned an unreadable body ({status})"))?;

        if let Some(error) = reply.error {
            return Err(anyhow!("KV {command} failed ({status}): {error}"));
        }
        if !status.is_success() {
            return Err(anyhow!("KV {command} failed with {status}"));
        }
        Ok(reply.result)
    }
}

/// Undo the JSON encoding applied on write; tolerate raw values
fn decode_value(result: Value) -> Option<String> {
    match result {
        Value::Null => None,
        Value::String(raw) => Some(serde_json::from_str::<String>(&raw).unwrap_or(raw)),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl KeyValueStore for RestKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        debug!("KV GET {key}");
        let result = self
            .send(self.http.get(format!("{}/get/{key}", self.url)), "GET")
            .await?;
        Ok(decode_value(result))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("KV SET {key}");
        let encoded = serde_json::to_string(value)?;
        self.send(
            self.http
                .post(format!("{}/set/{key}", self.url))
                .body(encoded),
            "SET",
        )
        .await?;
        Ok(())
    }
}
