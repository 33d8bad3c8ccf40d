//! OpenAI chat completion provider
//!
//! The `openai` crate reads its key from `OPENAI_KEY`; the bot binary exports it
//! from the config before the first request.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};

use super::ResponseGenerator;
use crate::features::conversation::{Role, TranscriptEntry};

#[derive(Clone)]
pub struct OpenAiGenerator {
    model: String,
}

impl OpenAiGenerator {
    pub fn new(model: String) -> Self {
        Self { model }
    }
}

fn chat_message(role: ChatCompletionMessageRole, content: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content.to_string()),
        name: None,
        function_call: None,
        tool_call_id: None,
        tool_calls: None,
    }
}

fn build_messages(
    system_instruction: &str,
    history: &[TranscriptEntry],
    message: &str,
) -> Vec<ChatCompletionMessage> {
    let mut messages = vec![chat_message(
        ChatCompletionMessageRole::System,
        system_instruction,
    )];

    for entry in history {
        let role = match entry.role {
            Role::User => ChatCompletionMessageRole::User,
            Role::Model => ChatCompletionMessageRole::Assistant,
        };
        messages.push(chat_message(role, &entry.text));
    }

    messages.push(chat_message(ChatCompletionMessageRole::User, message));
    messages
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[TranscriptEntry],
        message: &str,
    ) -> Result<String> {
        let messages = build_messages(system_instruction, history, message);
        debug!("Sending {} messages to OpenAI model {}", messages.len(), self.model);

        let completion = ChatCompletion::builder(&self.model, messages)
            .create()
            .await?;

        let response = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default()
            .trim()
            .to_string();

        if response.is_empty() {
            return Err(anyhow!("OpenAI returned an empty completion"));
        }
        Ok(response)
    }
}
