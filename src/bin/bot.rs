use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use oracle::commands::{CommandContext, CommandDispatcher, CommandRegistry};
use oracle::core::{Config, GenerationProvider};
use oracle::discord::DiscordRestClient;
use oracle::features::generation::create_generator;
use oracle::features::restriction::{KeyValueStore, MemoryStore, RestKvStore, RestrictionStore};
use oracle::interactions::{create_router, AppState, SignatureVerifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    // The openai crate reads its key from the environment, not from our config
    if config.generation_provider == GenerationProvider::OpenAi {
        std::env::set_var("OPENAI_API_KEY", &config.generation_api_key);
        std::env::set_var("OPENAI_KEY", &config.generation_api_key);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Oracle interactions endpoint...");

    let verifier = SignatureVerifier::from_hex(&config.public_key)
        .context("DISCORD_PUBLIC_KEY is not a valid Ed25519 public key")?;

    let discord = Arc::new(DiscordRestClient::new(
        config.discord_token.clone(),
        config.application_id.clone(),
    ));

    let store: Arc<dyn KeyValueStore> = match &config.kv {
        Some(kv) => {
            info!("Channel restriction stored in REST key-value store at {}", kv.url);
            Arc::new(RestKvStore::new(kv))
        }
        None => {
            warn!("KV_REST_API_URL not set - channel restriction is kept in memory and lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let generator = create_generator(&config);
    info!(
        "Generation provider: {:?} (model: {})",
        config.generation_provider, config.generation_model
    );

    let ctx = CommandContext::new(
        discord,
        generator,
        RestrictionStore::new(store),
        config.application_id.clone(),
    )
    .with_history_limit(config.history_limit);

    let registry = CommandRegistry::with_default_handlers();
    let names: Vec<&str> = registry.command_names().copied().collect();
    info!("Registered slash commands: {}", names.join(", "));

    let dispatcher = CommandDispatcher::new(registry, ctx);
    let app = create_router(AppState::new(verifier, dispatcher));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening for interactions on http://{address}/api/interactions");

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, finishing in-flight requests...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
