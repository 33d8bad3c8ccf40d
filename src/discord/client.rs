//! reqwest-backed Discord REST client
//!
//! - **Version**: 1.0.1
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.1: Configurable API base URL
//! - 1.0.0: Initial release

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::json;

use super::models::ChannelMessage;
use super::DiscordApi;
use crate::commands::slash::ApplicationCommand;
use crate::interactions::EPHEMERAL_FLAG;

pub const API_BASE: &str = "https://discord.com/api/v10";

#[derive(Clone)]
pub struct DiscordRestClient {
    http: Client,
    api_base: String,
    bot_token: String,
    application_id: String,
}

impl DiscordRestClient {
    pub fn new(bot_token: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: API_BASE.to_string(),
            bot_token: bot_token.into(),
            application_id: application_id.into(),
        }
    }

    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", format!("Bot {}", self.bot_token))
    }

    fn webhook_url(&self, token: &str) -> String {
        format!("{}/webhooks/{}/{token}", self.api_base, self.application_id)
    }

    fn original_response_url(&self, token: &str) -> String {
        format!("{}/messages/@original", self.webhook_url(token))
    }
}

/// Turn a non-2xx response into an error that carries Discord's explanation
async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow!("Discord {action} failed with {status}: {body}"))
}

#[async_trait]
impl DiscordApi for DiscordRestClient {
    async fn get_channel_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>> {
        let url = format!("{}/channels/{channel_id}/messages", self.api_base);
        debug!("Fetching {limit} messages from channel {channel_id}");

        let response = self
            .authorized(self.http.get(&url))
            .query(&[("limit", limit)])
            .send()
            .await
            .context("Failed to reach Discord for channel messages")?;

        ensure_success(response, "channel message fetch")
            .await?
            .json::<Vec<ChannelMessage>>()
            .await
            .context("Failed to parse channel messages")
    }

    async fn edit_original_response(&self, token: &str, content: &str) -> Result<()> {
        let response = self
            .http
            .patch(self.original_response_url(token))
            .json(&json!({ "content": content }))
            .send()
            .await
            .context("Failed to reach Discord to edit the original response")?;

        ensure_success(response, "original response edit").await?;
        Ok(())
    }

    async fn create_followup(&self, token: &str, content: &str, ephemeral: bool) -> Result<()> {
        let mut body = json!({ "content": content });
        if ephemeral {
            body["flags"] = json!(EPHEMERAL_FLAG);
        }

        let response = self
            .http
            .post(self.webhook_url(token))
            .json(&body)
            .send()
            .await
            .context("Failed to reach Discord for a follow-up message")?;

        ensure_success(response, "follow-up message").await?;
        Ok(())
    }

    async fn delete_original_response(&self, token: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.original_response_url(token))
            .send()
            .await
            .context("Failed to reach Discord to delete the original response")?;

        ensure_success(response, "original response delete").await?;
        Ok(())
    }

    async fn bulk_overwrite_global_commands(&self, commands: &[ApplicationCommand]) -> Result<()> {
        let url = format!("{}/applications/{}/commands", self.api_base, self.application_id);

        let response = self
            .authorized(self.http.put(&url))
            .json(commands)
            .send()
            .await
            .context("Failed to reach Discord for command registration")?;

        ensure_success(response, "global command overwrite").await?;
        Ok(())
    }
}
