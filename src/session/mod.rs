//! Per-conversation state.
//!
//! A `Session` records what the conversation is waiting for. The awaited input is a
//! closed enum so a template-parameter wait always carries its template.

pub mod store;

pub use store::{InMemorySessionStore, KeyedLocks, SessionStore};

use crate::templates::{Parameter, Template, build_query};
use std::collections::HashMap;
use std::fmt;

/// Identity of one conversation: a user inside a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub channel: u64,
    pub user: u64,
}

impl ConversationKey {
    pub fn new(channel: u64, user: u64) -> Self {
        Self { channel, user }
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.channel, self.user)
    }
}

/// The nine single-value prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    RawQuery,
    CountQuery,
    HostIp,
    DnsResolve,
    DnsReverse,
    DnsDomain,
    ExploitQuery,
    HoneypotIp,
    ScanIp,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RawQuery => "raw_query",
            Self::CountQuery => "count_query",
            Self::HostIp => "host_ip",
            Self::DnsResolve => "dns_resolve",
            Self::DnsReverse => "dns_reverse",
            Self::DnsDomain => "dns_domain",
            Self::ExploitQuery => "exploit_query",
            Self::HoneypotIp => "honeypot_ip",
            Self::ScanIp => "scan_ip",
        }
    }
}

/// Progress through a template's parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateProgress {
    pub template: &'static Template,
    /// Index of the next parameter to collect.
    pub index: usize,
    pub values: HashMap<String, String>,
}

impl TemplateProgress {
    pub fn new(template: &'static Template) -> Self {
        Self {
            template,
            index: 0,
            values: HashMap::new(),
        }
    }

    pub fn current_param(&self) -> Option<&'static Parameter> {
        self.template.param(self.index)
    }

    /// Record `value` for the awaited parameter and advance the cursor.
    /// Does nothing once every parameter has been collected.
    pub fn record(&mut self, value: impl Into<String>) {
        if let Some(param) = self.current_param() {
            self.values.insert(param.name.to_string(), value.into());
            self.index += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.template.params.len()
    }

    pub fn query(&self) -> String {
        build_query(self.template, &self.values)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Awaiting {
    #[default]
    Idle,
    Input(InputKind),
    TemplateParam(TemplateProgress),
}

/// Observable conversation state returned by every entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingInput(InputKind),
    AwaitingTemplateParam { template: &'static str, index: usize },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    /// Opaque id of the user owning the conversation.
    pub user: u64,
    pub awaiting: Awaiting,
    /// Last executed search query; resolves pagination tokens whose query did not fit.
    pub last_query: Option<String>,
    /// Target awaiting scan confirmation; resolves `doscan` tokens whose target did not fit.
    pub pending_scan: Option<String>,
}

impl Session {
    pub fn new(user: u64) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn state(&self) -> ConversationState {
        match &self.awaiting {
            Awaiting::Idle => ConversationState::Idle,
            Awaiting::Input(kind) => ConversationState::AwaitingInput(*kind),
            Awaiting::TemplateParam(p) => ConversationState::AwaitingTemplateParam {
                template: p.template.id,
                index: p.index,
            },
        }
    }

    pub fn reset(&mut self) {
        self.awaiting = Awaiting::Idle;
    }

    /// Idle with nothing a later callback could fall back on.
    pub fn is_blank(&self) -> bool {
        matches!(self.awaiting, Awaiting::Idle) && self.last_query.is_none() && self.pending_scan.is_none()
    }

    pub fn await_input(&mut self, kind: InputKind) {
        self.awaiting = Awaiting::Input(kind);
    }

    /// Start collecting parameters for `template`, discarding any previous flow.
    pub fn begin_template(&mut self, template: &'static Template) {
        self.awaiting = Awaiting::TemplateParam(TemplateProgress::new(template));
    }

    pub fn template_progress_mut(&mut self) -> Option<&mut TemplateProgress> {
        match &mut self.awaiting {
            Awaiting::TemplateParam(p) => Some(p),
            _ => None,
        }
    }
}
