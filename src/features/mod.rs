//! Features layer
//!
//! Each feature is a self-contained module used by the slash command handlers.

pub mod conversation;
pub mod generation;
pub mod personas;
pub mod restriction;

pub use conversation::{fetch_conversation_history, Role, TranscriptEntry};
pub use generation::{create_generator, ResponseGenerator};
pub use personas::{Persona, ORACLE};
pub use restriction::{KeyValueStore, MemoryStore, RestKvStore, RestrictionStore};
