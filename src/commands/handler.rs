//! Slash command handler trait
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Handlers choose whether their deferral is ephemeral
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use crate::interactions::Interaction;

/// Trait for slash command handlers
///
/// Handlers run after the interaction has been acknowledged with a deferred
/// response, so they reply through the interaction webhook (edit the original
/// response or post follow-ups) rather than returning a response body.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         interaction: &Interaction,
///         request_id: Uuid,
///     ) -> Result<()> {
///         ctx.discord.edit_original_response(&interaction.token, "pong").await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Whether the deferred acknowledgment is visible only to the invoker
    fn defer_ephemeral(&self) -> bool {
        false
    }

    /// Handle the slash command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context (Discord client, generator, restriction store)
    /// * `interaction` - The acknowledged application command interaction
    /// * `request_id` - Correlation id used in log lines
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        interaction: &Interaction,
        request_id: Uuid,
    ) -> Result<()>;
}
