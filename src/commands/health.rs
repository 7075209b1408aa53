//! `ping`: liveness plus upstream reachability. Not part of the conversation
//! command set, so it skips session handling but still sits behind the allow-list.
use crate::constants::icon;
use crate::flow::auth::{AuthGate, Denied};
use crate::model::{AppState, ShardManagerContainer};
use crate::shodan::{AccountInfo, ShodanApi};
use crate::ui::format::{code, signed_thousands};
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::time::Duration;

pub const PING_COMMAND: &str = "ping";

#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub status: &'static str,
    pub shodan_key_configured: bool,
    pub discord_token_configured: bool,
    pub latency_ms: Option<u128>,
    pub account: Option<AccountInfo>,
}

impl HealthReport {
    /// Probe the upstream account endpoint (served from cache when warm).
    pub async fn collect(
        api: &dyn ShodanApi,
        shodan_key_configured: bool,
        discord_token_configured: bool,
        latency: Option<Duration>,
    ) -> Self {
        let account = if shodan_key_configured {
            match api.account_info().await {
                Ok(info) => Some(info),
                Err(e) => {
                    tracing::warn!(target = "health", error = %e, "account info unreachable");
                    None
                }
            }
        } else {
            None
        };
        let status = if shodan_key_configured && discord_token_configured && account.is_some() {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            shodan_key_configured,
            discord_token_configured,
            latency_ms: latency.map(|l| l.as_millis()),
            account,
        }
    }

    /// Same as `collect`, for a chat caller. Nothing upstream is touched for a denied user.
    pub async fn collect_for(
        gate: &AuthGate,
        user: u64,
        api: &dyn ShodanApi,
        shodan_key_configured: bool,
        discord_token_configured: bool,
        latency: Option<Duration>,
    ) -> Result<Self, Denied> {
        gate.check(user)?;
        Ok(Self::collect(api, shodan_key_configured, discord_token_configured, latency).await)
    }

    pub fn render(&self) -> String {
        let flag = |b: bool| if b { icon("success") } else { icon("error") };
        let mut out = format!(
            "{} **Pong!** status: {}\n{} Shodan key configured\n{} Discord token configured\n",
            icon("gear"),
            code(self.status),
            flag(self.shodan_key_configured),
            flag(self.discord_token_configured),
        );
        let latency = self
            .latency_ms
            .map_or_else(|| "N/A".to_string(), |ms| format!("{ms} ms"));
        out.push_str(&format!("Heartbeat latency: {}\n", code(&latency)));
        if let Some(acc) = &self.account {
            out.push_str(&format!(
                "Plan: {} | query credits: {} | scan credits: {}",
                code(&acc.plan),
                signed_thousands(acc.query_credits),
                signed_thousands(acc.scan_credits),
            ));
        }
        out
    }
}

async fn shard_latency(ctx: &Context) -> Option<Duration> {
    let data = ctx.data.read().await;
    let shard_manager = data.get::<ShardManagerContainer>()?;
    let runners = shard_manager.runners.lock().await;
    runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
}

// Called for `!ping`.
pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        tracing::error!(target = "health", "AppState missing from TypeMap");
        return;
    };
    let reply = match HealthReport::collect_for(
        app_state.engine.gate(),
        msg.author.id.get(),
        app_state.api.as_ref(),
        !app_state.config.shodan_api_key.is_empty(),
        !app_state.config.discord_token.is_empty(),
        shard_latency(ctx).await,
    )
    .await
    {
        Ok(report) => report.render(),
        Err(denied) => {
            tracing::warn!(target = "flow.auth", user_id = denied.user, event = "ping", "access denied");
            denied.notice()
        }
    };
    if let Err(why) = msg.channel_id.say(&ctx.http, reply).await {
        tracing::warn!(target = "health", error = ?why, "error sending ping response");
    }
}
