//! The conversation core.
//!
//! Three entry points (command, callback, free text) share one pipeline:
//! authorize, acknowledge, lock the conversation, load its session, dispatch,
//! turn any unhandled error into a generic notice, then save. The core never sees
//! transport types; replies go out through an [`Outbox`].

pub mod actions;
pub mod auth;
pub mod machine;
pub mod outbox;
pub mod pagination;
pub mod router;

pub use auth::{AuthGate, Denied};
pub use outbox::{Outbox, Reply, Tone};

use crate::commands::Command;
use crate::session::{ConversationKey, ConversationState, KeyedLocks, Session, SessionStore};
use crate::shodan::ShodanApi;
use crate::ui::format;
use crate::ui::keyboard::{self, Keyboard};
use std::sync::Arc;

/// Transport facts about one inbound event.
pub struct Inbound<'a> {
    pub key: ConversationKey,
    /// Direct-message channel; idle free text is searched only here.
    pub direct_message: bool,
    pub outbox: &'a dyn Outbox,
}

impl Inbound<'_> {
    pub fn user(&self) -> u64 {
        self.key.user
    }
}

enum Event<'a> {
    Command(Command, &'a [String]),
    Callback(&'a str),
    Text(&'a str),
}

impl Event<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Event::Command(..) => "command",
            Event::Callback(_) => "callback",
            Event::Text(_) => "text",
        }
    }
}

/// Per-event view handed to the state machine and execution helpers.
pub struct Turn<'a> {
    pub api: &'a dyn ShodanApi,
    pub outbox: &'a dyn Outbox,
    pub direct_message: bool,
    pub prefix: &'a str,
}

impl Turn<'_> {
    pub async fn send(&self, body: impl Into<String>, keyboard: Option<Keyboard>) {
        let mut reply = Reply::new(body);
        reply.keyboard = keyboard;
        outbox::deliver(self.outbox, &reply).await;
    }

    pub async fn send_tone(&self, body: impl Into<String>, keyboard: Keyboard, tone: Tone) {
        outbox::deliver(self.outbox, &Reply::new(body).keyboard(keyboard).tone(tone)).await;
    }

    pub async fn send_all(&self, bodies: Vec<String>, keyboard: Keyboard) {
        outbox::deliver_all(self.outbox, bodies, keyboard, Tone::Normal).await;
    }

    pub async fn error(&self, message: &str) {
        self.send_tone(format::error(message), keyboard::back_to_main(), Tone::Error)
            .await;
    }
}

pub struct Engine {
    api: Arc<dyn ShodanApi>,
    sessions: Arc<dyn SessionStore>,
    locks: KeyedLocks,
    gate: AuthGate,
    prefix: String,
}

impl Engine {
    pub fn new(
        api: Arc<dyn ShodanApi>,
        sessions: Arc<dyn SessionStore>,
        gate: AuthGate,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            api,
            sessions,
            locks: KeyedLocks::new(),
            gate,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub async fn on_command(
        &self,
        inbound: &Inbound<'_>,
        command: Command,
        args: &[String],
    ) -> ConversationState {
        self.handle(inbound, Event::Command(command, args)).await
    }

    pub async fn on_callback(&self, inbound: &Inbound<'_>, token: &str) -> ConversationState {
        self.handle(inbound, Event::Callback(token)).await
    }

    pub async fn on_text(&self, inbound: &Inbound<'_>, text: &str) -> ConversationState {
        self.handle(inbound, Event::Text(text)).await
    }

    /// Current state without touching the session.
    pub async fn state_of(&self, key: ConversationKey) -> ConversationState {
        self.sessions
            .load(key)
            .await
            .map(|s| s.state())
            .unwrap_or(ConversationState::Idle)
    }

    async fn handle(&self, inbound: &Inbound<'_>, event: Event<'_>) -> ConversationState {
        let key = inbound.key;
        if let Err(denied) = self.gate.check(inbound.user()) {
            // Guild chatter from outsiders gets no notice.
            if matches!(event, Event::Text(_)) && !inbound.direct_message {
                tracing::trace!(target = "flow.auth", user_id = denied.user, "ignored guild text");
                return ConversationState::Idle;
            }
            tracing::warn!(target = "flow.auth", user_id = denied.user, event = event.kind(), "access denied");
            if let Err(e) = inbound.outbox.acknowledge(Some(&denied.notice())).await {
                tracing::warn!(target = "flow.auth", error = ?e, "denial notice failed");
            }
            return ConversationState::Idle;
        }
        if let Err(e) = inbound.outbox.acknowledge(None).await {
            tracing::debug!(target = "flow.engine", key = %key, error = ?e, "acknowledge failed");
        }

        let _guard = self.locks.acquire(key).await;
        let existing = self.sessions.load(key).await;
        // Idle guild chatter never creates a session.
        if existing.is_none() && matches!(event, Event::Text(_)) && !inbound.direct_message {
            return ConversationState::Idle;
        }
        let mut session = existing.unwrap_or_else(|| Session::new(inbound.user()));
        let before = session.state();
        let turn = Turn {
            api: self.api.as_ref(),
            outbox: inbound.outbox,
            direct_message: inbound.direct_message,
            prefix: &self.prefix,
        };

        let result = match event {
            Event::Command(command, args) => {
                tracing::info!(target = "flow.command", key = %key, command = %command, args = args.len(), "command");
                machine::run_command(&turn, &mut session, command, args).await
            }
            Event::Callback(token) => router::dispatch(&turn, &mut session, token).await,
            Event::Text(text) => machine::on_text(&turn, &mut session, text).await,
        };
        if let Err(e) = result {
            tracing::error!(target = "flow.engine", key = %key, error = ?e, "unhandled flow error");
            session.reset();
            turn.send_tone(
                format::failure(&format!("{e:#}"), &self.prefix),
                keyboard::back_to_main(),
                Tone::Error,
            )
            .await;
        }

        let after = session.state();
        if before != after {
            tracing::debug!(target = "flow.state", key = %key, from = ?before, to = ?after, "transition");
        }
        if session.is_blank() {
            self.sessions.remove(key).await;
        } else {
            self.sessions.save(key, session).await;
        }
        after
    }
}
