//! # Feature: Conversation History
//!
//! Builds a role-tagged transcript from the latest messages of a channel so the
//! model sees the conversation it is joining.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::discord::{ChannelMessage, DiscordApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Convert Discord's newest-first message list into an oldest-first transcript
///
/// Messages written by `bot_user_id` become `Model` turns, everything else is a
/// `User` turn. Messages without text (embeds or attachments only) are skipped.
pub fn build_transcript(messages: Vec<ChannelMessage>, bot_user_id: &str) -> Vec<TranscriptEntry> {
    messages
        .into_iter()
        .rev()
        .filter(|m| !m.content.trim().is_empty())
        .map(|m| {
            let role = if m.author.id == bot_user_id {
                Role::Model
            } else {
                Role::User
            };
            TranscriptEntry::new(role, m.content)
        })
        .collect()
}

/// Fetch up to `limit` recent messages of a channel as a transcript
pub async fn fetch_conversation_history(
    discord: &dyn DiscordApi,
    channel_id: &str,
    bot_user_id: &str,
    limit: u8,
) -> Result<Vec<TranscriptEntry>> {
    let messages = discord.get_channel_messages(channel_id, limit).await?;
    debug!(
        "Fetched {} messages from channel {channel_id}",
        messages.len()
    );
    Ok(build_transcript(messages, bot_user_id))
}
