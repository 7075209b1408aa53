// Command names and their per-command helpers.

pub mod health;
pub mod help;

use std::fmt;
use std::str::FromStr;

/// Conversation commands, shared by prefix and slash invocations. `t` is an alias of `templates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Templates,
    Search,
    Count,
    Host,
    Dns,
    Rdns,
    Domain,
    Exploit,
    Honeypot,
    Scan,
    ScanStatus,
    Info,
    Filters,
}

impl Command {
    pub const ALL: [Command; 15] = [
        Command::Start,
        Command::Help,
        Command::Templates,
        Command::Search,
        Command::Count,
        Command::Host,
        Command::Dns,
        Command::Rdns,
        Command::Domain,
        Command::Exploit,
        Command::Honeypot,
        Command::Scan,
        Command::ScanStatus,
        Command::Info,
        Command::Filters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Templates => "templates",
            Self::Search => "search",
            Self::Count => "count",
            Self::Host => "host",
            Self::Dns => "dns",
            Self::Rdns => "rdns",
            Self::Domain => "domain",
            Self::Exploit => "exploit",
            Self::Honeypot => "honeypot",
            Self::Scan => "scan",
            Self::ScanStatus => "scanstatus",
            Self::Info => "info",
            Self::Filters => "filters",
        }
    }
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "templates" | "t" => Ok(Command::Templates),
            "search" => Ok(Command::Search),
            "count" => Ok(Command::Count),
            "host" => Ok(Command::Host),
            "dns" => Ok(Command::Dns),
            "rdns" => Ok(Command::Rdns),
            "domain" => Ok(Command::Domain),
            "exploit" => Ok(Command::Exploit),
            "honeypot" => Ok(Command::Honeypot),
            "scan" => Ok(Command::Scan),
            "scanstatus" => Ok(Command::ScanStatus),
            "info" => Ok(Command::Info),
            "filters" => Ok(Command::Filters),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
