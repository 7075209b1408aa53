//! Conversation state machine: command entry, awaited-input consumption and the
//! template parameter loop.
use super::{Turn, actions};
use crate::commands::{Command, help};
use crate::session::{Awaiting, InputKind, Session};
use crate::templates::{Template, search_templates};
use crate::ui::format;
use crate::ui::keyboard;
use anyhow::Result;

/// Command entry. A bare command prompts for its value; a command with arguments
/// executes immediately. Either way the previous flow is abandoned.
pub async fn run_command(
    turn: &Turn<'_>,
    session: &mut Session,
    command: Command,
    args: &[String],
) -> Result<()> {
    session.reset();
    let joined = args.join(" ");
    let first = args.first().map(String::as_str).unwrap_or("");
    match command {
        Command::Start | Command::Help => {
            turn.send(help::overview(turn.prefix), Some(keyboard::main_menu()))
                .await;
            Ok(())
        }
        Command::Templates if joined.trim().is_empty() => {
            turn.send(format::templates_intro(), Some(keyboard::categories()))
                .await;
            Ok(())
        }
        Command::Templates => {
            let found = search_templates(&joined);
            let text = format::template_matches(joined.trim(), found.len());
            let kb = if found.is_empty() {
                keyboard::categories()
            } else {
                keyboard::template_matches(found)
            };
            turn.send(text, Some(kb)).await;
            Ok(())
        }
        Command::Search => prompt_or_run(turn, session, InputKind::RawQuery, &joined).await,
        Command::Count => prompt_or_run(turn, session, InputKind::CountQuery, &joined).await,
        Command::Host => prompt_or_run(turn, session, InputKind::HostIp, first).await,
        Command::Dns => prompt_or_run(turn, session, InputKind::DnsResolve, first).await,
        Command::Rdns => prompt_or_run(turn, session, InputKind::DnsReverse, first).await,
        Command::Domain => prompt_or_run(turn, session, InputKind::DnsDomain, first).await,
        Command::Exploit => prompt_or_run(turn, session, InputKind::ExploitQuery, &joined).await,
        Command::Honeypot => prompt_or_run(turn, session, InputKind::HoneypotIp, first).await,
        Command::Scan => prompt_or_run(turn, session, InputKind::ScanIp, first).await,
        Command::ScanStatus => {
            if first.is_empty() {
                turn.send(
                    format::scan_status_usage(turn.prefix),
                    Some(keyboard::back_to_main()),
                )
                .await;
                Ok(())
            } else {
                actions::scan_status(turn, first).await
            }
        }
        Command::Info => actions::account_info(turn).await,
        Command::Filters => {
            turn.send(format::filters_help(), Some(keyboard::back_to_main()))
                .await;
            Ok(())
        }
    }
}

async fn prompt_or_run(
    turn: &Turn<'_>,
    session: &mut Session,
    kind: InputKind,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        await_input(turn, session, kind).await;
        Ok(())
    } else {
        execute_input(turn, session, kind, value.trim()).await
    }
}

/// Enter `AwaitingInput(kind)` and prompt for the value.
pub async fn await_input(turn: &Turn<'_>, session: &mut Session, kind: InputKind) {
    session.await_input(kind);
    turn.send(format::prompt(kind), Some(keyboard::back_to_main()))
        .await;
}

/// Run the terminal action for a single-value flow. Leaves the session idle.
pub async fn execute_input(
    turn: &Turn<'_>,
    session: &mut Session,
    kind: InputKind,
    value: &str,
) -> Result<()> {
    session.reset();
    match kind {
        InputKind::RawQuery => {
            turn.send(format::running(value), None).await;
            actions::search(turn, session, value, 1, None).await
        }
        InputKind::CountQuery => actions::count(turn, value).await,
        InputKind::HostIp => actions::host(turn, value).await,
        InputKind::DnsResolve => actions::dns_resolve(turn, value).await,
        InputKind::DnsReverse => actions::dns_reverse(turn, value).await,
        InputKind::DnsDomain => actions::dns_domain(turn, value).await,
        InputKind::ExploitQuery => actions::exploits(turn, value).await,
        InputKind::HoneypotIp => actions::honeypot(turn, value).await,
        InputKind::ScanIp => {
            actions::confirm_scan(turn, session, value).await;
            Ok(())
        }
    }
}

/// Free-text entry point.
pub async fn on_text(turn: &Turn<'_>, session: &mut Session, text: &str) -> Result<()> {
    let value = text.trim();
    if value.is_empty() {
        return Ok(());
    }
    match &session.awaiting {
        Awaiting::Idle => {
            if turn.direct_message {
                turn.send(format::running(value), None).await;
                actions::search(turn, session, value, 1, None).await
            } else {
                Ok(())
            }
        }
        Awaiting::Input(kind) => {
            let kind = *kind;
            execute_input(turn, session, kind, value).await
        }
        Awaiting::TemplateParam(_) => record_param(turn, session, value).await,
    }
}

/// Start a fresh parameter-collection flow for `template`.
pub async fn begin_template(
    turn: &Turn<'_>,
    session: &mut Session,
    template: &'static Template,
) -> Result<()> {
    session.begin_template(template);
    advance(turn, session).await
}

/// Record `value` for the awaited parameter and move on.
pub async fn record_param(turn: &Turn<'_>, session: &mut Session, value: &str) -> Result<()> {
    if let Some(progress) = session.template_progress_mut() {
        progress.record(value);
    }
    advance(turn, session).await
}

/// Ask for the next parameter, or build and run the query once all are collected.
pub async fn advance(turn: &Turn<'_>, session: &mut Session) -> Result<()> {
    let Some(progress) = session.template_progress_mut() else {
        return Ok(());
    };
    match progress.current_param() {
        Some(param) => {
            let body = format::param_prompt(progress);
            turn.send(body, Some(keyboard::param_prompt(param))).await;
            Ok(())
        }
        None => {
            let query = progress.query();
            let facets = progress.template.facets();
            tracing::info!(target = "flow.template", template = progress.template.id, query = %query, "template complete");
            session.reset();
            turn.send(format::running(&query), None).await;
            actions::search(turn, session, &query, 1, facets).await
        }
    }
}
