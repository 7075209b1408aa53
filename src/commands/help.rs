//! Command catalog: drives the welcome/help text and slash command registration.
//!
//! Every conversation command is also registered as a slash command with a single
//! optional free-text `args` option, so `/host 8.8.8.8` and `!host 8.8.8.8` behave the same.

use super::Command;
use crate::constants::icon;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

/// Name of the free-text option carried by every slash command.
pub const ARGS_OPTION: &str = "args";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    Search,
    Dns,
    Exploit,
    Scanning,
    Other,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::Search => "MAIN COMMANDS",
            Self::Dns => "DNS & DOMAIN",
            Self::Exploit => "EXPLOIT & VULN",
            Self::Scanning => "SCANNING",
            Self::Other => "OTHER",
        }
    }
    fn icon_key(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Dns => "dns",
            Self::Exploit => "exploit",
            Self::Scanning => "ip",
            Self::Other => "gear",
        }
    }
}

pub struct CommandInfo {
    pub command: Command,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    /// Argument placeholder shown in usage, empty when the command takes none.
    pub args: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Search,
        aliases: &[],
        description: "Run a Shodan query directly",
        args: "[query]",
        category: CommandCategory::Search,
    },
    CommandInfo {
        command: Command::Templates,
        aliases: &["t"],
        description: "Browse ready-made search templates, or find them by keyword",
        args: "[keyword]",
        category: CommandCategory::Search,
    },
    CommandInfo {
        command: Command::Host,
        aliases: &[],
        description: "Full details for one IP",
        args: "[IP]",
        category: CommandCategory::Search,
    },
    CommandInfo {
        command: Command::Count,
        aliases: &[],
        description: "Count results without spending credits",
        args: "[query]",
        category: CommandCategory::Search,
    },
    CommandInfo {
        command: Command::Dns,
        aliases: &[],
        description: "Resolve a hostname to an IP",
        args: "[hostname]",
        category: CommandCategory::Dns,
    },
    CommandInfo {
        command: Command::Rdns,
        aliases: &[],
        description: "Reverse DNS lookup",
        args: "[IP]",
        category: CommandCategory::Dns,
    },
    CommandInfo {
        command: Command::Domain,
        aliases: &[],
        description: "DNS records for a domain",
        args: "[domain]",
        category: CommandCategory::Dns,
    },
    CommandInfo {
        command: Command::Exploit,
        aliases: &[],
        description: "Search exploits by keyword",
        args: "[query]",
        category: CommandCategory::Exploit,
    },
    CommandInfo {
        command: Command::Honeypot,
        aliases: &[],
        description: "Check whether an IP is a honeypot",
        args: "[IP]",
        category: CommandCategory::Exploit,
    },
    CommandInfo {
        command: Command::Scan,
        aliases: &[],
        description: "Request a Shodan scan of an IP or network",
        args: "[IP/CIDR]",
        category: CommandCategory::Scanning,
    },
    CommandInfo {
        command: Command::ScanStatus,
        aliases: &[],
        description: "Check the status of a running scan",
        args: "[scan_id]",
        category: CommandCategory::Scanning,
    },
    CommandInfo {
        command: Command::Info,
        aliases: &[],
        description: "Account plan and credits",
        args: "",
        category: CommandCategory::Other,
    },
    CommandInfo {
        command: Command::Filters,
        aliases: &[],
        description: "Shodan filter reference",
        args: "",
        category: CommandCategory::Other,
    },
    CommandInfo {
        command: Command::Help,
        aliases: &[],
        description: "Show this help",
        args: "",
        category: CommandCategory::Other,
    },
    CommandInfo {
        command: Command::Start,
        aliases: &[],
        description: "Open the main menu",
        args: "",
        category: CommandCategory::Other,
    },
];

const CATEGORIES: [CommandCategory; 5] = [
    CommandCategory::Search,
    CommandCategory::Dns,
    CommandCategory::Exploit,
    CommandCategory::Scanning,
    CommandCategory::Other,
];

pub fn commands() -> &'static [CommandInfo] {
    COMMANDS
}

/// Every invocable name, aliases included.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS
        .iter()
        .flat_map(|c| std::iter::once(c.command.name()).chain(c.aliases.iter().copied()))
        .collect()
}

fn slash_command(name: &str, info: &CommandInfo) -> CreateCommand {
    let mut cmd = CreateCommand::new(name).description(info.description);
    if !info.args.is_empty() {
        cmd = cmd.add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                ARGS_OPTION,
                format!("Optional {}; omit to be prompted", info.args.trim_matches(['[', ']'])),
            )
            .required(false),
        );
    }
    cmd
}

/// Slash command definitions for every name in the catalog.
pub fn register_all() -> Vec<CreateCommand> {
    COMMANDS
        .iter()
        .flat_map(|info| {
            std::iter::once(info.command.name())
                .chain(info.aliases.iter().copied())
                .map(move |name| slash_command(name, info))
        })
        .collect()
}

/// Welcome text listing the commands by category.
pub fn overview(prefix: &str) -> String {
    let rule = "─".repeat(30);
    let mut out = format!(
        "{} **Shodan Recon Bot**\n*Shodan search from Discord*\n\n{} **Welcome!**\nRun Shodan searches from chat with ready-made templates.\n",
        icon("rocket"),
        icon("wave")
    );
    for category in CATEGORIES {
        out.push_str(&format!(
            "\n{rule}\n{} **{}:**\n",
            icon(category.icon_key()),
            category.name()
        ));
        for info in COMMANDS.iter().filter(|c| c.category == category) {
            let mut usage = format!("`{prefix}{}", info.command.name());
            if !info.args.is_empty() {
                usage.push(' ');
                usage.push_str(info.args);
            }
            usage.push('`');
            for alias in info.aliases {
                usage.push_str(&format!(" or `{prefix}{alias}`"));
            }
            out.push_str(&format!("{usage} | {}\n", info.description));
        }
    }
    out.push_str(&format!(
        "\n{rule}\n{} **TIP:** use `{prefix}templates` for quick searches. Pick one, fill in the blanks, done! ✨",
        icon("star")
    ));
    out
}
