//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::config::Config;
use crate::flow::Engine;
use crate::shodan::ShodanApi;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// A container for the ShardManager, allowing it to be stored in the global context.
/// This provides access to shard-specific information, like gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// Conversation core shared by every entry point.
    pub engine: Engine,
    /// Same client the engine uses; the health probe reads it directly.
    pub api: Arc<dyn ShodanApi>,
    pub config: Config,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
