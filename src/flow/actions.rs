//! Terminal actions: one upstream call each, rendered through the formatter.
//!
//! An `Api` error from upstream is shown to the operator and the action succeeds.
//! Transport and decode failures propagate so the engine's error handler reports them.
use super::Turn;
use crate::constants::{COUNT_FACETS, PAGE_SIZE, icon};
use crate::error::ShodanError;
use crate::session::Session;
use crate::ui::format;
use crate::ui::keyboard;
use anyhow::{Context, Result};

async fn upstream_failure(turn: &Turn<'_>, action: &'static str, err: ShodanError) -> Result<()> {
    match err {
        ShodanError::Api(msg) => {
            tracing::warn!(target = "flow.action", action, error = %msg, "upstream rejected request");
            turn.error(&msg).await;
            Ok(())
        }
        other => Err(other).with_context(|| format!("{action} failed")),
    }
}

/// Search and render display page `page` of `query`, remembering it for pagination.
pub async fn search(
    turn: &Turn<'_>,
    session: &mut Session,
    query: &str,
    page: u32,
    facets: Option<&str>,
) -> Result<()> {
    session.last_query = Some(query.to_string());
    tracing::info!(target = "flow.action", action = "search", query = %query, page, "search");
    let result = match turn.api.search(query, page, facets).await {
        Ok(r) => r,
        Err(e) => return upstream_failure(turn, "search", e).await,
    };
    let matches: Vec<_> = result
        .matches
        .into_iter()
        .take(PAGE_SIZE as usize)
        .collect();
    let bodies = format::search_results(query, page, result.total, &result.facets, &matches);
    let kb = if result.total > 0 {
        keyboard::pagination(query, page, result.total, PAGE_SIZE)
    } else {
        keyboard::back_to_main()
    };
    turn.send_all(bodies, kb).await;
    Ok(())
}

pub async fn count(turn: &Turn<'_>, query: &str) -> Result<()> {
    match turn.api.count(query, Some(COUNT_FACETS)).await {
        Ok(r) => {
            turn.send_all(vec![format::count_result(query, &r)], keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "count", e).await,
    }
}

pub async fn host(turn: &Turn<'_>, ip: &str) -> Result<()> {
    turn.send(
        format!("{} *Looking up {}...*", icon("hourglass"), format::code(ip)),
        None,
    )
    .await;
    match turn.api.host(ip).await {
        Ok(h) => {
            turn.send_all(format::host_info(&h), keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "host", e).await,
    }
}

pub async fn dns_resolve(turn: &Turn<'_>, hostname: &str) -> Result<()> {
    match turn.api.dns_resolve(&[hostname.to_string()]).await {
        Ok(d) => {
            turn.send_all(vec![format::dns_resolve(&d)], keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "dns_resolve", e).await,
    }
}

pub async fn dns_reverse(turn: &Turn<'_>, ip: &str) -> Result<()> {
    match turn.api.dns_reverse(&[ip.to_string()]).await {
        Ok(d) => {
            turn.send_all(vec![format::dns_reverse(&d)], keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "dns_reverse", e).await,
    }
}

pub async fn dns_domain(turn: &Turn<'_>, domain: &str) -> Result<()> {
    match turn.api.dns_domain(domain).await {
        Ok(d) => {
            turn.send_all(vec![format::domain_info(&d)], keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "dns_domain", e).await,
    }
}

pub async fn exploits(turn: &Turn<'_>, query: &str) -> Result<()> {
    match turn.api.search_exploits(query).await {
        Ok(r) => {
            turn.send_all(format::exploits(query, &r), keyboard::back_to_main())
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "exploits", e).await,
    }
}

pub async fn honeypot(turn: &Turn<'_>, ip: &str) -> Result<()> {
    let score = turn.api.honeypot_score(ip).await;
    turn.send(format::honeypot(ip, score), Some(keyboard::back_to_main()))
        .await;
    Ok(())
}

/// Ask for confirmation before spending scan credits.
pub async fn confirm_scan(turn: &Turn<'_>, session: &mut Session, target: &str) {
    session.pending_scan = Some(target.to_string());
    turn.send_tone(
        format::scan_confirm(target),
        keyboard::confirm_scan(target),
        super::Tone::Warning,
    )
    .await;
}

pub async fn scan(turn: &Turn<'_>, target: &str) -> Result<()> {
    tracing::info!(target = "flow.action", action = "scan", scan_target = %target, "submitting scan");
    match turn.api.scan(target).await {
        Ok(s) => {
            turn.send_tone(
                format::scan_submitted(&s, turn.prefix),
                keyboard::back_to_main(),
                super::Tone::Success,
            )
            .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "scan", e).await,
    }
}

pub async fn scan_status(turn: &Turn<'_>, id: &str) -> Result<()> {
    match turn.api.scan_status(id).await {
        Ok(s) => {
            turn.send(format::scan_status(&s), Some(keyboard::back_to_main()))
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "scan_status", e).await,
    }
}

pub async fn account_info(turn: &Turn<'_>) -> Result<()> {
    match turn.api.account_info().await {
        Ok(info) => {
            turn.send(format::account_info(&info), Some(keyboard::back_to_main()))
                .await;
            Ok(())
        }
        Err(e) => upstream_failure(turn, "account_info", e).await,
    }
}
