//! Outbound seam between the conversation core and the chat transport.
use crate::constants::MAX_PLAIN_LENGTH;
use crate::ui::format::{chunk, truncate};
use crate::ui::keyboard::Keyboard;
use async_trait::async_trait;

/// Visual weight of a reply; adapters map it to an accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Reply {
    pub body: String,
    pub keyboard: Option<Keyboard>,
    pub tone: Tone,
    /// Send as plain text instead of rich rendering.
    pub plain: bool,
}

impl Reply {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Plain, truncated rendering used when the rich send failed.
    pub fn fallback(&self) -> Self {
        Self {
            body: truncate(&self.body, MAX_PLAIN_LENGTH),
            keyboard: self.keyboard.clone(),
            tone: Tone::Normal,
            plain: true,
        }
    }
}

#[async_trait]
pub trait Outbox: Send + Sync {
    /// Acknowledge the inbound event. `Some(notice)` is shown only to the caller.
    async fn acknowledge(&self, notice: Option<&str>) -> anyhow::Result<()>;
    async fn send(&self, reply: &Reply) -> anyhow::Result<()>;
}

/// Send `reply`, retrying once with the plain fallback. Returns whether anything was delivered.
pub async fn deliver(outbox: &dyn Outbox, reply: &Reply) -> bool {
    let Err(first) = outbox.send(reply).await else {
        return true;
    };
    tracing::warn!(target = "flow.outbox", error = ?first, "send failed; retrying with plain fallback");
    match outbox.send(&reply.fallback()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(target = "flow.outbox", error = ?e, "fallback send failed; dropping message");
            false
        }
    }
}

/// Deliver several bodies in order, splitting any that are too long, with `keyboard`
/// attached to the final message only.
pub async fn deliver_all(outbox: &dyn Outbox, bodies: Vec<String>, keyboard: Keyboard, tone: Tone) {
    let parts: Vec<String> = bodies.iter().flat_map(|b| chunk(b)).collect();
    let last = parts.len().saturating_sub(1);
    for (i, body) in parts.into_iter().enumerate() {
        let mut reply = Reply::new(body).tone(tone);
        if i == last {
            reply = reply.keyboard(keyboard.clone());
        }
        deliver(outbox, &reply).await;
    }
}
