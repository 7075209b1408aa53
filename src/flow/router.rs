//! Button-press dispatch. Each namespace maps to exactly one handler; unknown or
//! malformed tokens end the current flow without a reply.
use super::{Turn, actions, machine};
use crate::commands::help;
use crate::interactions::ids::{CallbackToken, DnsTool, InfoAction, MenuTarget};
use crate::session::{Awaiting, InputKind, Session};
use crate::templates::get_template;
use crate::ui::format;
use crate::ui::keyboard;
use anyhow::Result;

pub async fn dispatch(turn: &Turn<'_>, session: &mut Session, raw: &str) -> Result<()> {
    let Some(token) = CallbackToken::parse(raw) else {
        tracing::debug!(target = "flow.router", token = %raw, "unroutable token");
        session.reset();
        return Ok(());
    };
    tracing::debug!(target = "flow.router", token = %raw, "dispatch");
    route(turn, session, token).await
}

async fn route(turn: &Turn<'_>, session: &mut Session, token: CallbackToken) -> Result<()> {
    match token {
        CallbackToken::Noop => Ok(()),
        CallbackToken::Menu(target) => menu(turn, session, target).await,
        CallbackToken::Cmd(action) => info(turn, action).await,
        CallbackToken::Category(category) => {
            session.reset();
            turn.send(
                format::category_intro(category),
                Some(keyboard::templates_in_category(category)),
            )
            .await;
            Ok(())
        }
        CallbackToken::Template(id) => {
            session.reset();
            match get_template(&id) {
                Some(t) => {
                    turn.send(format::template_detail(t), Some(keyboard::template_detail(t)))
                        .await
                }
                None => turn.send(format::template_not_found(), None).await,
            }
            Ok(())
        }
        CallbackToken::Use(id) => match get_template(&id) {
            Some(t) => machine::begin_template(turn, session, t).await,
            None => {
                session.reset();
                turn.send(format::template_not_found(), None).await;
                Ok(())
            }
        },
        CallbackToken::Example(id) => {
            session.reset();
            match get_template(&id) {
                Some(t) => {
                    turn.send(format::running(t.example), None).await;
                    actions::search(turn, session, t.example, 1, t.facets()).await
                }
                None => {
                    turn.send(format::template_not_found(), None).await;
                    Ok(())
                }
            }
        }
        CallbackToken::Page { page, query } => {
            let query = if query.is_empty() {
                session.last_query.clone()
            } else {
                Some(query)
            };
            session.reset();
            match query {
                Some(q) => actions::search(turn, session, &q, page, None).await,
                None => Ok(()),
            }
        }
        CallbackToken::Dns(tool) => {
            let kind = match tool {
                DnsTool::Resolve => InputKind::DnsResolve,
                DnsTool::Reverse => InputKind::DnsReverse,
                DnsTool::Domain => InputKind::DnsDomain,
            };
            machine::await_input(turn, session, kind).await;
            Ok(())
        }
        CallbackToken::DoScan(target) => {
            let target = if target.is_empty() {
                session.pending_scan.take()
            } else {
                Some(target)
            };
            session.reset();
            session.pending_scan = None;
            match target {
                Some(t) => actions::scan(turn, &t).await,
                None => Ok(()),
            }
        }
        CallbackToken::Default { param, value } => default_value(turn, session, &param, value).await,
    }
}

async fn menu(turn: &Turn<'_>, session: &mut Session, target: MenuTarget) -> Result<()> {
    session.reset();
    match target {
        MenuTarget::Main => {
            turn.send(help::overview(turn.prefix), Some(keyboard::main_menu()))
                .await
        }
        MenuTarget::Templates => {
            turn.send(format::templates_intro(), Some(keyboard::categories()))
                .await
        }
        MenuTarget::Dns => turn.send(format::dns_menu(), Some(keyboard::dns_menu())).await,
        MenuTarget::Vuln => {
            turn.send(format::vuln_intro(), Some(keyboard::vuln_templates()))
                .await
        }
        MenuTarget::Host => machine::await_input(turn, session, InputKind::HostIp).await,
        MenuTarget::Exploits => machine::await_input(turn, session, InputKind::ExploitQuery).await,
        MenuTarget::Raw => machine::await_input(turn, session, InputKind::RawQuery).await,
        MenuTarget::Count => machine::await_input(turn, session, InputKind::CountQuery).await,
    }
    Ok(())
}

/// Informational actions leave the conversation state untouched.
async fn info(turn: &Turn<'_>, action: InfoAction) -> Result<()> {
    match action {
        InfoAction::Account => actions::account_info(turn).await,
        InfoAction::Filters => {
            turn.send(format::filters_help(), Some(keyboard::back_to_main()))
                .await;
            Ok(())
        }
        InfoAction::Help => {
            turn.send(help::overview(turn.prefix), Some(keyboard::main_menu()))
                .await;
            Ok(())
        }
    }
}

/// Same as typing `value` for the awaited parameter. A button left over from an
/// earlier prompt re-sends the current prompt; outside a template flow it is ignored.
async fn default_value(
    turn: &Turn<'_>,
    session: &mut Session,
    param: &str,
    value: String,
) -> Result<()> {
    let Awaiting::TemplateParam(progress) = &session.awaiting else {
        session.reset();
        return Ok(());
    };
    let Some(current) = progress.current_param() else {
        return machine::advance(turn, session).await;
    };
    if current.name != param {
        tracing::debug!(target = "flow.router", expected = current.name, got = %param, "stale default button");
        return machine::advance(turn, session).await;
    }
    let value = if value.is_empty() {
        current.example.to_string()
    } else {
        value
    };
    machine::record_param(turn, session, &value).await
}
