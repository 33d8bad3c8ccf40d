//! Chat command handler
//!
//! Handles: chat
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Split replies over Discord's message limit into follow-ups
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_string_option;
use crate::core::chunk_for_message;
use crate::features::conversation::{fetch_conversation_history, TranscriptEntry};
use crate::features::personas::ORACLE;
use crate::interactions::Interaction;

pub const REFUSAL_MESSAGE: &str = "Sorry, I'm only allowed to chat in the designated channel.";
pub const APOLOGY_MESSAGE: &str = "Oops, something went wrong. Couldn't reach the oracle.";

/// Handler for /chat - answer as the Oracle using recent channel history
pub struct ChatHandler;

#[async_trait]
impl SlashCommandHandler for ChatHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["chat"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        interaction: &Interaction,
        request_id: Uuid,
    ) -> Result<()> {
        let start_time = Instant::now();

        let channel_id = interaction
            .channel_id
            .as_deref()
            .ok_or_else(|| anyhow!("Chat interaction has no channel"))?;
        let message = get_string_option(interaction.options(), "message")
            .ok_or_else(|| anyhow!("Missing message argument"))?;

        if !ctx.restriction.is_allowed(channel_id).await? {
            info!("[{request_id}] /chat refused in channel {channel_id} (restricted)");
            return Self::send_refusal(&ctx, &interaction.token, request_id).await;
        }

        let history = fetch_conversation_history(
            ctx.discord.as_ref(),
            channel_id,
            &ctx.bot_user_id,
            ctx.history_limit,
        )
        .await?;
        debug!(
            "[{request_id}] Context: {} messages | Prompt length: {}",
            history.len(),
            message.len()
        );

        let reply = Self::generate_reply(&ctx, &history, &message, request_id).await;
        Self::deliver(&ctx, &interaction.token, &reply).await?;

        info!(
            "[{request_id}] /chat response sent | Time: {:?} | Length: {}",
            start_time.elapsed(),
            reply.len()
        );
        Ok(())
    }
}

impl ChatHandler {
    /// Swap the public "thinking" placeholder for a message only the invoker sees
    async fn send_refusal(ctx: &CommandContext, token: &str, request_id: Uuid) -> Result<()> {
        if let Err(e) = ctx.discord.delete_original_response(token).await {
            warn!("[{request_id}] Failed to delete deferred response: {e:#}");
        }
        ctx.discord
            .create_followup(token, REFUSAL_MESSAGE, true)
            .await
    }

    /// Generation failures never propagate; the user gets the apology instead
    async fn generate_reply(
        ctx: &CommandContext,
        history: &[TranscriptEntry],
        message: &str,
        request_id: Uuid,
    ) -> String {
        match ctx
            .generator
            .generate(ORACLE.system_prompt, history, message)
            .await
        {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                warn!("[{request_id}] Generation returned an empty reply");
                APOLOGY_MESSAGE.to_string()
            }
            Err(e) => {
                error!("[{request_id}] Generation failed: {e:#}");
                APOLOGY_MESSAGE.to_string()
            }
        }
    }

    /// First chunk replaces the deferred message, the rest follow as new messages
    async fn deliver(ctx: &CommandContext, token: &str, reply: &str) -> Result<()> {
        let chunks = chunk_for_message(reply);
        let mut chunks = chunks.iter();

        if let Some(first) = chunks.next() {
            ctx.discord.edit_original_response(token, first).await?;
        }
        for chunk in chunks {
            ctx.discord.create_followup(token, chunk, false).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MESSAGE_LIMIT;
    use crate::features::conversation::Role;
    use crate::testing::{
        channel_message, command_interaction, DiscordCall, Harness, MockDiscord, MockGenerator,
        BOT_ID,
    };

    fn edit(content: &str) -> DiscordCall {
        DiscordCall::EditOriginal {
            token: "interaction-token".to_string(),
            content: content.to_string(),
        }
    }

    fn history_fetch(channel_id: &str) -> DiscordCall {
        DiscordCall::GetMessages {
            channel_id: channel_id.to_string(),
            limit: 10,
        }
    }

    async fn run_chat(harness: &Harness, channel_id: &str, message: &str) -> Result<()> {
        ChatHandler
            .handle(
                harness.ctx.clone(),
                &command_interaction("chat", channel_id, Some(message)),
                Uuid::new_v4(),
            )
            .await
    }

    #[tokio::test]
    async fn test_refuses_outside_restricted_channel() {
        let harness = Harness::new(MockDiscord::default(), MockGenerator::replying("never"));
        harness.restriction.restrict_to("A").await.unwrap();

        run_chat(&harness, "B", "hello").await.unwrap();

        assert!(harness.generator.calls().is_empty());
        assert_eq!(
            harness.discord.calls(),
            vec![
                DiscordCall::DeleteOriginal {
                    token: "interaction-token".to_string()
                },
                DiscordCall::Followup {
                    token: "interaction-token".to_string(),
                    content: REFUSAL_MESSAGE.to_string(),
                    ephemeral: true,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unrestricted_fetches_history_and_generates() {
        // Discord returns newest first
        let discord = MockDiscord::with_messages(vec![
            channel_message("42", "what do you think?"),
            channel_message(BOT_ID, "I think you're wrong."),
            channel_message("42", "pineapple belongs on pizza"),
        ]);
        let harness = Harness::new(discord, MockGenerator::replying("Still wrong."));

        run_chat(&harness, "anywhere", "be honest").await.unwrap();

        let calls = harness.generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_instruction, ORACLE.system_prompt);
        assert_eq!(calls[0].message, "be honest");
        assert_eq!(
            calls[0].history,
            vec![
                TranscriptEntry::new(Role::User, "pineapple belongs on pizza"),
                TranscriptEntry::new(Role::Model, "I think you're wrong."),
                TranscriptEntry::new(Role::User, "what do you think?"),
            ]
        );
        assert_eq!(
            harness.discord.calls(),
            vec![history_fetch("anywhere"), edit("Still wrong.")]
        );
    }

    #[tokio::test]
    async fn test_allowed_in_restricted_channel() {
        let harness = Harness::new(MockDiscord::default(), MockGenerator::replying("Fine."));
        harness.restriction.restrict_to("A").await.unwrap();

        run_chat(&harness, "A", "hello").await.unwrap();

        assert_eq!(harness.generator.calls().len(), 1);
        assert_eq!(
            harness.discord.calls(),
            vec![history_fetch("A"), edit("Fine.")]
        );
    }

    #[tokio::test]
    async fn test_generation_failure_sends_apology() {
        let harness = Harness::new(
            MockDiscord::default(),
            MockGenerator::failing("Gemini API returned 500: internal secret detail"),
        );

        run_chat(&harness, "A", "hello").await.unwrap();

        assert_eq!(
            harness.discord.calls(),
            vec![history_fetch("A"), edit(APOLOGY_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_empty_generation_sends_apology() {
        let harness = Harness::new(MockDiscord::default(), MockGenerator::replying("  \n"));

        run_chat(&harness, "A", "hello").await.unwrap();

        assert_eq!(harness.discord.calls().last(), Some(&edit(APOLOGY_MESSAGE)));
    }

    #[tokio::test]
    async fn test_history_failure_propagates_without_generation() {
        let discord = MockDiscord {
            fail_history: true,
            ..MockDiscord::default()
        };
        let harness = Harness::new(discord, MockGenerator::replying("never"));

        let result = run_chat(&harness, "A", "hello").await;

        assert!(result.is_err());
        assert!(harness.generator.calls().is_empty());
        assert_eq!(harness.discord.calls(), vec![history_fetch("A")]);
    }

    #[tokio::test]
    async fn test_long_reply_split_into_followups() {
        let reply = format!("{}\n{}", "a".repeat(MESSAGE_LIMIT - 10), "b".repeat(50));
        let harness = Harness::new(MockDiscord::default(), MockGenerator::replying(&reply));

        run_chat(&harness, "A", "monologue please").await.unwrap();

        assert_eq!(
            harness.discord.calls(),
            vec![
                history_fetch("A"),
                edit(&"a".repeat(MESSAGE_LIMIT - 10)),
                DiscordCall::Followup {
                    token: "interaction-token".to_string(),
                    content: "b".repeat(50),
                    ephemeral: false,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_message_option_fails() {
        let harness = Harness::new(MockDiscord::default(), MockGenerator::replying("never"));

        let result = ChatHandler
            .handle(
                harness.ctx.clone(),
                &command_interaction("chat", "A", None),
                Uuid::new_v4(),
            )
            .await;

        assert!(result.is_err());
        assert!(harness.discord.calls().is_empty());
    }
}
