use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

use shodan_bot::config::{self, Config};
use shodan_bot::flow::{AuthGate, Engine};
use shodan_bot::handler::Handler;
use shodan_bot::model::{AppState, ShardManagerContainer};
use shodan_bot::session::InMemorySessionStore;
use shodan_bot::shodan::{ShodanApi, ShodanClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_source = config::load_dotenv();
    let config = Config::from_env().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
    tracing::info!(target = "config", source = %env_source, "configuration loaded");

    let client = ShodanClient::new(
        config.shodan_api_key.clone(),
        Duration::from_secs(config.shodan_timeout_secs),
        config.account_info_ttl_secs,
    )
    .context("building Shodan client")?;
    let api: Arc<dyn ShodanApi> = Arc::new(client);

    let gate = AuthGate::new(config.authorized_users.iter().copied());
    if gate.is_open() {
        tracing::warn!(target = "flow.auth", "AUTHORIZED_USERS is empty; every user is allowed");
    }
    let engine = Engine::new(
        api.clone(),
        Arc::new(InMemorySessionStore::new()),
        gate,
        config.prefix.clone(),
    );

    let handler = Handler {
        prefix: config.prefix.clone(),
        guild_id: config.guild_id.map(GuildId::new),
    };
    let token = config.discord_token.clone();
    let app_state = Arc::new(AppState {
        engine,
        api,
        config,
    });

    // Prefix commands and free text need MESSAGE_CONTENT; DMs need DIRECT_MESSAGES.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .context("creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    tracing::info!(target = "startup", "starting gateway client");
    client.start().await.context("Discord client error")?;
    Ok(())
}
