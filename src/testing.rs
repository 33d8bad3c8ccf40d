//! Recording test doubles for the external collaborators

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::commands::slash::ApplicationCommand;
use crate::commands::CommandContext;
use crate::discord::{ChannelMessage, DiscordApi, MessageAuthor};
use crate::features::conversation::TranscriptEntry;
use crate::features::generation::ResponseGenerator;
use crate::features::restriction::{MemoryStore, RestrictionStore};
use crate::interactions::Interaction;

pub const BOT_ID: &str = "1399372941980078220";

#[derive(Debug, Clone, PartialEq)]
pub enum DiscordCall {
    GetMessages { channel_id: String, limit: u8 },
    EditOriginal { token: String, content: String },
    Followup { token: String, content: String, ephemeral: bool },
    DeleteOriginal { token: String },
    RegisterCommands(Vec<String>),
}

#[derive(Default)]
pub struct MockDiscord {
    pub messages: Vec<ChannelMessage>,
    pub fail_history: bool,
    pub calls: Mutex<Vec<DiscordCall>>,
}

impl MockDiscord {
    pub fn with_messages(messages: Vec<ChannelMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DiscordCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn registered_commands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .find_map(|c| match c {
                DiscordCall::RegisterCommands(names) => Some(names),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn record(&self, call: DiscordCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DiscordApi for MockDiscord {
    async fn get_channel_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>> {
        self.record(DiscordCall::GetMessages {
            channel_id: channel_id.to_string(),
            limit,
        });
        if self.fail_history {
            return Err(anyhow!("Discord channel message fetch failed with 403 Forbidden"));
        }
        Ok(self.messages.iter().take(limit as usize).cloned().collect())
    }

    async fn edit_original_response(&self, token: &str, content: &str) -> Result<()> {
        self.record(DiscordCall::EditOriginal {
            token: token.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }

    async fn create_followup(&self, token: &str, content: &str, ephemeral: bool) -> Result<()> {
        self.record(DiscordCall::Followup {
            token: token.to_string(),
            content: content.to_string(),
            ephemeral,
        });
        Ok(())
    }

    async fn delete_original_response(&self, token: &str) -> Result<()> {
        self.record(DiscordCall::DeleteOriginal {
            token: token.to_string(),
        });
        Ok(())
    }

    async fn bulk_overwrite_global_commands(&self, commands: &[ApplicationCommand]) -> Result<()> {
        self.record(DiscordCall::RegisterCommands(
            commands.iter().map(|c| c.name.to_string()).collect(),
        ));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCall {
    pub system_instruction: String,
    pub history: Vec<TranscriptEntry>,
    pub message: String,
}

pub struct MockGenerator {
    reply: std::result::Result<String, String>,
    pub calls: Mutex<Vec<GenerateCall>>,
}

impl MockGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            reply: Err(error.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[TranscriptEntry],
        message: &str,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(GenerateCall {
            system_instruction: system_instruction.to_string(),
            history: history.to_vec(),
            message: message.to_string(),
        });
        self.reply.clone().map_err(|e| anyhow!(e))
    }
}

pub struct Harness {
    pub discord: Arc<MockDiscord>,
    pub generator: Arc<MockGenerator>,
    pub restriction: RestrictionStore,
    pub ctx: Arc<CommandContext>,
}

impl Harness {
    pub fn new(discord: MockDiscord, generator: MockGenerator) -> Self {
        let discord = Arc::new(discord);
        let generator = Arc::new(generator);
        let restriction = RestrictionStore::new(Arc::new(MemoryStore::new()));
        let ctx = Arc::new(CommandContext::new(
            discord.clone(),
            generator.clone(),
            restriction.clone(),
            BOT_ID,
        ));
        Self {
            discord,
            generator,
            restriction,
            ctx,
        }
    }
}

pub fn channel_message(author_id: &str, content: &str) -> ChannelMessage {
    ChannelMessage {
        content: content.to_string(),
        author: MessageAuthor {
            id: author_id.to_string(),
        },
    }
}

pub fn command_interaction(name: &str, channel_id: &str, message: Option<&str>) -> Interaction {
    let options = match message {
        Some(text) => json!([{ "name": "message", "type": 3, "value": text }]),
        None => json!([]),
    };
    serde_json::from_value(json!({
        "id": "900",
        "type": 2,
        "token": "interaction-token",
        "channel_id": channel_id,
        "member": { "user": { "id": "42" } },
        "data": { "name": name, "options": options }
    }))
    .unwrap()
}
