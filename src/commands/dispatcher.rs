//! Interaction dispatch and the deferred-reply lifecycle
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::context::CommandContext;
use super::registry::CommandRegistry;
use crate::interactions::{Interaction, InteractionKind, InteractionResponse, Rejection};

/// Outcome of a dispatched interaction
///
/// `response` goes straight back to Discord. `task` is the handler running in
/// the background; the HTTP path never awaits it.
pub struct Dispatched {
    pub response: InteractionResponse,
    pub task: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
    ctx: Arc<CommandContext>,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry, ctx: CommandContext) -> Self {
        Self {
            registry: Arc::new(registry),
            ctx: Arc::new(ctx),
        }
    }

    /// Route an authenticated interaction
    ///
    /// Known commands are acknowledged with a deferred response and their
    /// handler is spawned; handler errors are only logged because the
    /// invoking user already has their response.
    pub fn dispatch(
        &self,
        interaction: Interaction,
        request_id: Uuid,
    ) -> Result<Dispatched, Rejection> {
        match interaction.kind() {
            InteractionKind::Ping => {
                debug!("[{request_id}] Ping interaction received - Discord health check");
                Ok(Dispatched {
                    response: InteractionResponse::pong(),
                    task: None,
                })
            }
            InteractionKind::ApplicationCommand => {
                let name = interaction.command_name().unwrap_or_default().to_string();
                let Some(handler) = self.registry.get(&name) else {
                    warn!("[{request_id}] Unknown command '{name}'");
                    return Err(Rejection::UnknownCommand);
                };

                info!(
                    "[{request_id}] /{name} | User: {} | Channel: {}",
                    interaction.invoker_id().unwrap_or("unknown"),
                    interaction.channel_id.as_deref().unwrap_or("none")
                );

                let response = InteractionResponse::deferred(handler.defer_ephemeral());
                let ctx = Arc::clone(&self.ctx);
                let task = tokio::spawn(async move {
                    let start_time = Instant::now();
                    match handler.handle(ctx, &interaction, request_id).await {
                        Ok(()) => debug!(
                            "[{request_id}] /{name} finished in {:?}",
                            start_time.elapsed()
                        ),
                        Err(e) => error!("[{request_id}] Error handling slash command '{name}': {e:#}"),
                    }
                });

                Ok(Dispatched {
                    response,
                    task: Some(task),
                })
            }
            InteractionKind::Unsupported(kind) => {
                warn!("[{request_id}] Unsupported interaction type {kind}");
                Err(Rejection::UnsupportedInteraction)
            }
        }
    }
}
