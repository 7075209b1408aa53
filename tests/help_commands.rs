//! Ensures the command catalog, help text and slash registration agree.
use shodan_bot::commands::Command;
use shodan_bot::commands::help::{all_command_names, overview, register_all};
use std::str::FromStr;

#[test]
fn help_command_names_unique_and_present() {
    let names = all_command_names();
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }
    let expected = [
        "start", "help", "templates", "t", "search", "count", "host", "dns", "rdns", "domain",
        "exploit", "honeypot", "scan", "scanstatus", "info", "filters",
    ];
    assert_eq!(sorted.len(), expected.len());
    for e in expected {
        assert!(sorted.contains(&e), "Missing help entry for `{}`", e);
        assert!(Command::from_str(e).is_ok(), "`{e}` does not parse");
    }
}

#[test]
fn every_name_is_registered_as_slash_command() {
    assert_eq!(register_all().len(), all_command_names().len());
}

#[test]
fn parsing_is_case_insensitive_and_strict() {
    assert_eq!(Command::from_str("HOST"), Ok(Command::Host));
    assert_eq!(Command::from_str("t"), Ok(Command::Templates));
    assert!(Command::from_str("ping").is_err());
    assert!(Command::from_str("").is_err());
}

#[test]
fn overview_uses_configured_prefix() {
    let text = overview("?");
    assert!(text.contains("`?host [IP]`"));
    assert!(text.contains("`?templates [keyword]` or `?t`"));
    for c in Command::ALL {
        assert!(text.contains(&format!("?{}", c.name())), "{c} missing from help");
    }
}
