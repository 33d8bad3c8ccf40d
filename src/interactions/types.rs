//! Interaction wire types
//!
//! Inbound interaction payloads and the initial response shapes Discord
//! accepts from an interactions endpoint.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interaction `type` values
pub mod interaction_type {
    pub const PING: u64 = 1;
    pub const APPLICATION_COMMAND: u64 = 2;
}

/// Interaction callback `type` values
pub mod response_type {
    pub const PONG: u8 = 1;
    pub const DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 5;
}

/// Message flag: only the invoking user can see the message
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    Unsupported(u64),
}

impl From<u64> for InteractionKind {
    fn from(value: u64) -> Self {
        match value {
            interaction_type::PING => Self::Ping,
            interaction_type::APPLICATION_COMMAND => Self::ApplicationCommand,
            other => Self::Unsupported(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub id: String,
    /// Kept wide so unknown future types reach dispatch instead of failing to parse
    #[serde(rename = "type")]
    pub interaction_type: u64,
    /// Continuation token for follow-ups (valid for 15 minutes)
    #[serde(default)]
    pub token: String,
    pub channel_id: Option<String>,
    pub data: Option<CommandData>,
    /// Present when invoked in a guild
    pub member: Option<InteractionMember>,
    /// Present when invoked in a DM
    pub user: Option<InteractionUser>,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        InteractionKind::from(self.interaction_type)
    }

    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    pub fn options(&self) -> &[CommandDataOption] {
        self.data.as_ref().map(|d| d.options.as_slice()).unwrap_or(&[])
    }

    /// Id of the invoking user, whether in a guild or a DM
    pub fn invoker_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| &m.user)
            .or(self.user.as_ref())
            .map(|u| u.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandDataOption {
    pub name: String,
    #[serde(rename = "type", default)]
    pub option_type: u8,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionMember {
    pub user: InteractionUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    pub id: String,
}

/// Initial response body returned from the interactions endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub response_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InteractionResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            response_type: response_type::PONG,
            data: None,
        }
    }

    /// "Bot is thinking..." acknowledgment; the real reply arrives through the webhook
    pub fn deferred(ephemeral: bool) -> Self {
        Self {
            response_type: response_type::DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE,
            data: ephemeral.then(|| InteractionResponseData {
                content: None,
                flags: Some(EPHEMERAL_FLAG),
            }),
        }
    }
}
