//! # Command System
//!
//! Slash command (/) dispatch for Discord interactions received over HTTP.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Dispatcher spawns handlers after the deferred acknowledgment
//! - 1.0.0: Initial release with handler trait, context and registry

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod slash;

pub use context::CommandContext;
pub use dispatcher::{CommandDispatcher, Dispatched};
pub use handler::SlashCommandHandler;
pub use registry::CommandRegistry;

pub use slash::{
    create_slash_commands, get_string_option, register_global_commands, slash_command_names,
};
