use crate::commands::{self, Command, health, help};
use crate::flow::Inbound;
use crate::interactions::outbox::{DiscordOutbox, Origin};
use crate::session::ConversationKey;
use crate::AppState;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as AppCommand, CommandInteraction, Interaction};
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

pub struct Handler {
    pub prefix: String,
    /// Restricts slash command registration to one guild when set.
    pub guild_id: Option<GuildId>,
}

/// Whitespace-separated words of the optional `args` option.
fn slash_args(command: &CommandInteraction) -> Vec<String> {
    command
        .data
        .options
        .iter()
        .find(|o| o.name == help::ARGS_OPTION)
        .and_then(|o| o.value.as_str())
        .map(|raw| raw.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target = "handler", "AppState missing from TypeMap");
            return;
        };
        match &interaction {
            Interaction::Command(command) => {
                let Ok(parsed) = Command::from_str(&command.data.name) else {
                    tracing::debug!(target = "handler", name = %command.data.name, "unknown slash command");
                    return;
                };
                let args = slash_args(command);
                let outbox = DiscordOutbox::new(
                    ctx.http.clone(),
                    command.channel_id,
                    Origin::Command(command),
                );
                let inbound = Inbound {
                    key: ConversationKey::new(command.channel_id.get(), command.user.id.get()),
                    direct_message: command.guild_id.is_none(),
                    outbox: &outbox,
                };
                app_state.engine.on_command(&inbound, parsed, &args).await;
            }
            Interaction::Component(component) => {
                let outbox = DiscordOutbox::new(
                    ctx.http.clone(),
                    component.channel_id,
                    Origin::Component(component),
                );
                let inbound = Inbound {
                    key: ConversationKey::new(
                        component.channel_id.get(),
                        component.user.id.get(),
                    ),
                    direct_message: component.guild_id.is_none(),
                    outbox: &outbox,
                };
                app_state
                    .engine
                    .on_callback(&inbound, &component.data.custom_id)
                    .await;
            }
            _ => {}
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::error!(target = "handler", "AppState missing from TypeMap");
            return;
        };
        let outbox = DiscordOutbox::new(ctx.http.clone(), msg.channel_id, Origin::Message);
        let inbound = Inbound {
            key: ConversationKey::new(msg.channel_id.get(), msg.author.id.get()),
            direct_message: msg.guild_id.is_none(),
            outbox: &outbox,
        };

        let Some(command_body) = msg.content.strip_prefix(self.prefix.as_str()) else {
            app_state.engine.on_text(&inbound, &msg.content).await;
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        if command_str.eq_ignore_ascii_case(health::PING_COMMAND) {
            commands::health::run_prefix(&ctx, &msg).await;
            return;
        }
        let Ok(command) = Command::from_str(command_str) else {
            return;
        };
        let args_vec: Vec<String> = args.map(str::to_string).collect();
        app_state.engine.on_command(&inbound, command, &args_vec).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target = "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = help::register_all();
        let count = commands_to_register.len();
        let registered = match self.guild_id {
            Some(guild) => guild.set_commands(&ctx.http, commands_to_register).await,
            None => AppCommand::set_global_commands(&ctx.http, commands_to_register).await,
        };
        match registered {
            Ok(_) => {
                tracing::info!(target = "handler", count, guild = ?self.guild_id, "registered slash commands")
            }
            Err(e) => {
                tracing::error!(target = "handler", error = ?e, "error registering slash commands")
            }
        }

        if let Some(app_state) = AppState::from_ctx(&ctx).await {
            let report = health::HealthReport::collect(
                app_state.api.as_ref(),
                !app_state.config.shodan_api_key.is_empty(),
                !app_state.config.discord_token.is_empty(),
                None,
            )
            .await;
            tracing::info!(
                target = "health",
                status = report.status,
                plan = report.account.as_ref().map(|a| a.plan.as_str()).unwrap_or("-"),
                "startup health check"
            );
        }
    }
}
