// Core layer - configuration and shared helpers
pub mod core;

// Discord REST API
pub mod discord;

// Features layer - restriction, conversation history, personas, generation
pub mod features;

// HTTP layer - the interactions endpoint
pub mod interactions;

// Application layer
pub mod commands;

#[cfg(test)]
pub(crate) mod testing;

pub use core::Config;

pub use commands::{CommandContext, CommandDispatcher, CommandRegistry};
pub use discord::{DiscordApi, DiscordRestClient};
pub use features::{
    create_generator, KeyValueStore, MemoryStore, Persona, ResponseGenerator, RestKvStore,
    RestrictionStore, ORACLE,
};
pub use interactions::{create_router, AppState, SignatureVerifier};
