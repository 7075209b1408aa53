//! Discord side of the [`Outbox`] seam.
//!
//! Prefix messages reply in the channel. Button presses and slash commands are
//! acknowledged on their interaction; slash command output goes out as follow-ups
//! so it replaces the deferred "thinking" state.
use super::util::{defer_component, ephemeral};
use crate::flow::{Outbox, Reply};
use crate::ui::buttons::action_rows;
use crate::ui::style::reply_embed;
use async_trait::async_trait;
use serenity::builder::{CreateInteractionResponseFollowup, CreateMessage};
use serenity::http::Http;
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::model::id::ChannelId;
use std::sync::Arc;

/// What triggered the event being answered.
pub enum Origin<'a> {
    Message,
    Component(&'a ComponentInteraction),
    Command(&'a CommandInteraction),
}

pub struct DiscordOutbox<'a> {
    http: Arc<Http>,
    channel: ChannelId,
    origin: Origin<'a>,
}

impl<'a> DiscordOutbox<'a> {
    pub fn new(http: Arc<Http>, channel: ChannelId, origin: Origin<'a>) -> Self {
        Self {
            http,
            channel,
            origin,
        }
    }
}

#[async_trait]
impl Outbox for DiscordOutbox<'_> {
    async fn acknowledge(&self, notice: Option<&str>) -> anyhow::Result<()> {
        match (&self.origin, notice) {
            (Origin::Message, None) => {}
            (Origin::Message, Some(text)) => {
                self.channel.say(&self.http, text).await?;
            }
            (Origin::Component(c), None) => defer_component(&self.http, c).await,
            (Origin::Component(c), Some(text)) => {
                c.create_response(&self.http, ephemeral(text)).await?;
            }
            (Origin::Command(c), None) => c.defer(&self.http).await?,
            (Origin::Command(c), Some(text)) => {
                c.create_response(&self.http, ephemeral(text)).await?;
            }
        }
        Ok(())
    }

    async fn send(&self, reply: &Reply) -> anyhow::Result<()> {
        let rows = reply.keyboard.as_ref().map(action_rows).unwrap_or_default();
        match &self.origin {
            Origin::Command(c) => {
                let mut followup = CreateInteractionResponseFollowup::new().components(rows);
                followup = if reply.plain {
                    followup.content(reply.body.clone())
                } else {
                    followup.embed(reply_embed(&reply.body, reply.tone))
                };
                c.create_followup(&self.http, followup).await?;
            }
            Origin::Message | Origin::Component(_) => {
                let mut message = CreateMessage::new().components(rows);
                message = if reply.plain {
                    message.content(reply.body.clone())
                } else {
                    message.embed(reply_embed(&reply.body, reply.tone))
                };
                self.channel.send_message(&self.http, message).await?;
            }
        }
        tracing::trace!(target = "ui.send", channel = %self.channel, plain = reply.plain, "reply sent");
        Ok(())
    }
}
