//! # Feature: Channel Restriction
//!
//! One stored channel id limits where `/chat` answers. `/setup` overwrites it,
//! `/chat` reads it. The record never expires and is not scoped per guild.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: REST key-value backend for Vercel KV / Upstash
//! - 1.0.0: Initial release with in-memory store

pub mod rest_kv;
pub mod store;

use anyhow::{Context, Result};
use std::sync::Arc;

pub use rest_kv::RestKvStore;
pub use store::{KeyValueStore, MemoryStore};

/// Storage key shared with existing deployments
pub const ALLOWED_CHANNEL_KEY: &str = "allowedChannelId";

#[derive(Clone)]
pub struct RestrictionStore {
    store: Arc<dyn KeyValueStore>,
}

impl RestrictionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn allowed_channel(&self) -> Result<Option<String>> {
        let value = self
            .store
            .get(ALLOWED_CHANNEL_KEY)
            .await
            .context("Failed to read channel restriction")?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    pub async fn restrict_to(&self, channel_id: &str) -> Result<()> {
        self.store
            .set(ALLOWED_CHANNEL_KEY, channel_id)
            .await
            .context("Failed to store channel restriction")
    }

    /// Unrestricted, or restricted to exactly this channel
    pub async fn is_allowed(&self, channel_id: &str) -> Result<bool> {
        Ok(match self.allowed_channel().await? {
            Some(allowed) => allowed == channel_id,
            None => true,
        })
    }
}
