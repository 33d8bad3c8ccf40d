//! # Discord REST API
//!
//! The slice of Discord's HTTP API the interactions endpoint talks to: channel
//! history, interaction webhooks (edit/follow-up/delete) and bulk command
//! registration.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add delete_original_response for ephemeral refusals
//! - 1.0.0: Initial release

pub mod client;
pub mod models;

use anyhow::Result;
use async_trait::async_trait;

pub use client::DiscordRestClient;
pub use models::{ChannelMessage, MessageAuthor};

use crate::commands::slash::ApplicationCommand;

/// Discord REST operations used by command handlers
///
/// Interaction webhook calls authenticate with the interaction token and need no
/// bot token; everything else uses `Authorization: Bot <token>`.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Most recent messages of a channel, newest first (Discord's order)
    async fn get_channel_messages(&self, channel_id: &str, limit: u8)
        -> Result<Vec<ChannelMessage>>;

    /// Replace the content of the deferred "thinking" message
    async fn edit_original_response(&self, token: &str, content: &str) -> Result<()>;

    /// Post an additional message tied to the interaction
    async fn create_followup(&self, token: &str, content: &str, ephemeral: bool) -> Result<()>;

    async fn delete_original_response(&self, token: &str) -> Result<()>;

    /// Replace every global command of the application with `commands`
    async fn bulk_overwrite_global_commands(&self, commands: &[ApplicationCommand]) -> Result<()>;
}
