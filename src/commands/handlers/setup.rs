//! Setup command handler
//!
//! Handles: setup
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::interactions::Interaction;

pub const SETUP_CONFIRMATION: &str = "✅ Bot is now configured to only respond in this channel.";

/// Handler for /setup - restrict the bot to the invoking channel
///
/// Administrator-only visibility is enforced by Discord through the command's
/// `default_member_permissions`; the handler itself does no permission check.
pub struct SetupHandler;

#[async_trait]
impl SlashCommandHandler for SetupHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["setup"]
    }

    fn defer_ephemeral(&self) -> bool {
        true
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        interaction: &Interaction,
        request_id: Uuid,
    ) -> Result<()> {
        let channel_id = interaction
            .channel_id
            .as_deref()
            .ok_or_else(|| anyhow!("Setup interaction has no channel"))?;

        ctx.restriction.restrict_to(channel_id).await?;
        info!("[{request_id}] Channel restriction set to {channel_id}");

        ctx.discord
            .edit_original_response(&interaction.token, SETUP_CONFIRMATION)
            .await
    }
}
