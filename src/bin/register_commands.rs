use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;

use oracle::commands::{register_global_commands, slash_command_names};
use oracle::core::{log_level_from_env, DiscordConfig};
use oracle::discord::DiscordRestClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Only Discord credentials; registration never talks to the model
    let config = DiscordConfig::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level_from_env()))
        .init();

    info!(
        "Registering global commands for application {}: {}",
        config.application_id,
        slash_command_names().join(", ")
    );

    let discord = DiscordRestClient::new(config.token, config.application_id);
    register_global_commands(&discord)
        .await
        .context("Failed to register global slash commands")?;

    info!("Done. Global commands can take a few minutes to appear in clients.");
    Ok(())
}
