//! Discord markdown rendering for every reply the bot sends.
//!
//! Functions here are pure: they take API models or catalog entries and return
//! message bodies. Anything that came from the operator or the API goes through
//! `escape` or `code` before it is embedded.

use crate::constants::{
    HONEYPOT_LIKELY, HONEYPOT_MAYBE, MAX_ERROR_LENGTH, MAX_MESSAGE_LENGTH, PAGE_SIZE, icon,
};
use crate::session::{InputKind, TemplateProgress};
use crate::shodan::{
    AccountInfo, Banner, CountResult, DnsResolve, DnsReverse, DomainInfo, ExploitResult, Facets,
    HostInfo, ScanStatus, ScanSubmission,
};
use crate::templates::{Category, Template};
use chrono::NaiveDateTime;
use serde_json::Value;

const RULE_WIDTH: usize = 28;
const BAR_WIDTH: usize = 10;
const FACET_ROWS: usize = 8;
const MATCH_VULNS: usize = 5;
const HOST_VULNS: usize = 10;
const HOST_PORTS: usize = 30;
const HOST_SERVICES: usize = 8;
const SUBDOMAINS: usize = 20;
const DNS_RECORDS: usize = 15;
const EXPLOITS: usize = 10;

/// Backslash-escape markdown control characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '~' | '`' | '|' | '>' | '#' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Inline code span. Backticks cannot be escaped inside a span so they are swapped out.
pub fn code(text: &str) -> String {
    format!("`{}`", text.replace('`', "ˋ"))
}

/// Truncate to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Split a body into pieces that fit one message, preferring line boundaries.
pub fn chunk(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if current.chars().count() + line.chars().count() + 1 > MAX_MESSAGE_LENGTH
            && !current.is_empty()
        {
            parts.push(std::mem::take(&mut current));
        }
        if line.chars().count() > MAX_MESSAGE_LENGTH {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(MAX_MESSAGE_LENGTH) {
                parts.push(piece.iter().collect());
            }
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }
    parts
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn signed_thousands(n: i64) -> String {
    if n < 0 {
        format!("-{}", group_thousands(n.unsigned_abs()))
    } else {
        group_thousands(n as u64)
    }
}

/// Render an upstream ISO timestamp as `YYYY-MM-DD HH:MM UTC`; unparseable input is kept.
pub fn timestamp(raw: &str) -> String {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| escape(raw))
}

/// Text bar with `value / max` of `width` cells filled.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value.min(max) as f64 / max as f64) * width as f64) as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

pub fn header(title: &str, subtitle: Option<&str>) -> String {
    let mut out = format!("{} **{}**", icon("rocket"), escape(title));
    if let Some(sub) = subtitle {
        out.push_str(&format!("\n*{}*", escape(sub)));
    }
    out.push('\n');
    out.push_str(&rule());
    out
}

fn section(title: &str, icon_key: &str) -> String {
    format!("\n{} **{}**", icon(icon_key), escape(title))
}

/// `icon **Key:** value`, with `N/A` for missing or empty values.
pub fn key_value(key: &str, value: Option<&str>, icon_key: &str) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape(v),
        _ => "*N/A*".to_string(),
    };
    format!("{} **{}:** {}", icon(icon_key), escape(key), value)
}

fn more(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("*... and {hidden} more*"))
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

pub fn error(message: &str) -> String {
    format!("{} **Error:** {}", icon("error"), escape(message))
}

/// Generic notice for a failure nobody handled.
pub fn failure(detail: &str, prefix: &str) -> String {
    format!(
        "{} **Something went wrong:**\n{}\n\n*Try again or use `{prefix}start`.*",
        icon("error"),
        code(&truncate(detail, MAX_ERROR_LENGTH))
    )
}

pub fn running(query: &str) -> String {
    format!("{} *Running:* {}", icon("hourglass"), code(query))
}

pub fn template_not_found() -> String {
    format!("{} Template not found.", icon("error"))
}

/// Prompt shown when a flow waits for a single value.
pub fn prompt(kind: InputKind) -> String {
    let (key, title, ask, example) = match kind {
        InputKind::RawQuery => (
            "search",
            "Shodan Search",
            "Send a Shodan query.",
            r#"product:"nginx" country:"ID" port:443"#,
        ),
        InputKind::CountQuery => (
            "stats",
            "Count Query",
            "Send a query to count (does not use query credits).",
            r#"country:"ID" port:22"#,
        ),
        InputKind::HostIp => ("host", "Host Lookup", "Send an IP address to look up.", "8.8.8.8"),
        InputKind::DnsResolve => (
            "dns",
            "DNS Resolve",
            "Send a hostname to resolve.",
            "google.com",
        ),
        InputKind::DnsReverse => (
            "dns",
            "Reverse DNS",
            "Send an IP for a reverse lookup.",
            "8.8.8.8",
        ),
        InputKind::DnsDomain => (
            "globe",
            "Domain Info",
            "Send a domain to list its DNS records.",
            "example.com",
        ),
        InputKind::ExploitQuery => (
            "exploit",
            "Exploit Search",
            "Send a keyword to search exploits.",
            "apache 2.4",
        ),
        InputKind::HoneypotIp => (
            "honeypot",
            "Honeypot Detection",
            "Send an IP to check its honeypot score.",
            "1.2.3.4",
        ),
        InputKind::ScanIp => (
            "ip",
            "Request Scan",
            "Send an IP or CIDR to scan.",
            "1.2.3.4",
        ),
    };
    let mut out = format!(
        "{} **{title}**\n\n{ask}\n*Example:* {}",
        icon(key),
        code(example)
    );
    if kind == InputKind::ScanIp {
        out.push_str(&format!(
            "\n\n{} **Note:** scans spend scan credits.",
            icon("warning")
        ));
    }
    out
}

pub fn scan_status_usage(prefix: &str) -> String {
    format!(
        "{} **Scan Status**\n\nSend a scan ID to check its status.\n*Example:* {}",
        icon("info"),
        code(&format!("{prefix}scanstatus abc123"))
    )
}

pub fn scan_confirm(target: &str) -> String {
    format!(
        "{} **Confirm Scan**\n\nScan {}?\nThis spends scan credits.",
        icon("warning"),
        code(target)
    )
}

pub fn dns_menu() -> String {
    format!("{} **DNS Tools**\n\nPick a DNS tool:", icon("dns"))
}

pub fn templates_intro() -> String {
    format!(
        "{}\n\n{} Pick a category to see its ready-made searches:",
        header("Search Templates", Some("Pick a category below")),
        icon("info")
    )
}

pub fn template_matches(keyword: &str, found: usize) -> String {
    if found == 0 {
        return format!(
            "{} No templates match {}. Pick a category instead:",
            icon("warning"),
            code(keyword)
        );
    }
    format!(
        "{} **{found}** template(s) match {}:",
        icon("search"),
        code(keyword)
    )
}

pub fn category_intro(category: Category) -> String {
    format!(
        "{} **{}**\n\nPick a template:",
        category.emoji(),
        escape(category.name())
    )
}

pub fn vuln_intro() -> String {
    format!("{} **Vulnerability Search**\n\nPick a template:", icon("vuln"))
}

pub fn template_detail(t: &Template) -> String {
    let params: Vec<String> = t
        .params
        .iter()
        .map(|p| {
            format!(
                "{} **{}** | {} ({})\n    *Example:* {}",
                icon("right"),
                escape(p.name),
                escape(p.description),
                if p.required { "required" } else { "optional" },
                code(p.example)
            )
        })
        .collect();
    format!(
        "{} **{}**\n{}\n\n{} {}\n\n{} **Parameters:**\n{}\n\n{} **Query pattern:**\n{}\n\n{} **Example query:**\n{}",
        t.emoji,
        escape(t.name),
        rule(),
        icon("info"),
        escape(t.description),
        icon("gear"),
        params.join("\n"),
        icon("search"),
        code(t.query),
        icon("star"),
        code(t.example)
    )
}

/// Progress list for a template flow followed by the request for the next value.
pub fn param_prompt(progress: &TemplateProgress) -> String {
    let t = progress.template;
    let lines: Vec<String> = t
        .params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i < progress.index {
                let v = progress.values.get(p.name).map(String::as_str).unwrap_or("?");
                format!("{} **{}:** {}", icon("success"), escape(p.name), code(v))
            } else if i == progress.index {
                format!("{} **{}:** *(waiting for input...)*", icon("right"), escape(p.name))
            } else {
                format!("{} **{}:** -", icon("dot"), escape(p.name))
            }
        })
        .collect();
    let mut out = format!(
        "{} **Template: {}**\n{}\n**Progress:**\n{}\n{}",
        icon("gear"),
        escape(t.name),
        rule(),
        lines.join("\n"),
        rule()
    );
    if let Some(p) = progress.current_param() {
        out.push_str(&format!(
            "\n{} **Enter {}:**\n*Example:* {}",
            icon("right"),
            escape(p.description),
            code(p.example)
        ));
    }
    out
}

fn facet_label(name: &str) -> (&'static str, String) {
    match name {
        "org" => ("🏢", "Top Organizations".into()),
        "port" => ("🔌", "Top Ports".into()),
        "product" => ("📦", "Top Products".into()),
        "os" => ("💻", "Top OS".into()),
        "country" => ("🌍", "Top Countries".into()),
        "city" => ("🏙️", "Top Cities".into()),
        "isp" => ("📶", "Top ISPs".into()),
        "domain" => ("🌐", "Top Domains".into()),
        "asn" => ("🔢", "Top ASNs".into()),
        "vuln" => ("🛡️", "Top CVEs".into()),
        other => ("📊", escape(other)),
    }
}

/// Facet breakdown with bars scaled to the top bucket of each facet.
pub fn facets(facets: &Facets) -> String {
    if facets.is_empty() {
        return String::new();
    }
    let mut lines = vec![String::new(), rule(), format!("{} **Breakdown:**", icon("chart"))];
    for (name, buckets) in facets {
        let (emoji, label) = facet_label(name);
        lines.push(format!("\n{emoji} **{label}:**"));
        let top = buckets.first().map(|b| b.count).unwrap_or(1);
        for b in buckets.iter().take(FACET_ROWS) {
            lines.push(format!(
                "{} {} ({})",
                bar(b.count, top, BAR_WIDTH),
                code(&b.label()),
                group_thousands(b.count)
            ));
        }
    }
    lines.join("\n")
}

/// Header plus one card per match. `matches` is already the slice for `page`.
pub fn search_results(
    query: &str,
    page: u32,
    total: u64,
    facet_data: &Facets,
    matches: &[Banner],
) -> Vec<String> {
    let mut head = format!(
        "{}\n\n{} **Total found:** {}\n{} **Page:** {page} (showing {})",
        header("Shodan Search Results", Some(&*format!("Query: {query}"))),
        icon("stats"),
        group_thousands(total),
        icon("info"),
        matches.len()
    );
    head.push_str(&facets(facet_data));
    let mut out = vec![head];
    let first = (page.max(1) - 1) as usize * PAGE_SIZE as usize;
    out.extend(
        matches
            .iter()
            .enumerate()
            .map(|(i, m)| match_card(m, first + i + 1)),
    );
    if matches.is_empty() {
        out.push(format!("{} *No results for this query.*", icon("warning")));
    }
    out
}

pub fn match_card(m: &Banner, index: usize) -> String {
    let port = m.port.map(|p| p.to_string());
    let mut lines = vec![
        format!("{} **Result #{index}**", icon("host")),
        key_value("IP", m.ip_str.as_deref(), "ip"),
        key_value("Port", port.as_deref(), "port"),
        key_value("Organization", m.org.as_deref(), "org"),
        key_value("ISP", m.isp.as_deref(), "isp"),
    ];
    if let Some(product) = m.product.as_deref() {
        let full = format!("{product} {}", m.version.as_deref().unwrap_or("")).trim().to_string();
        lines.push(key_value("Product", Some(&*full), "product"));
    }
    if m.os.is_some() {
        lines.push(key_value("OS", m.os.as_deref(), "os"));
    }
    lines.push(key_value("Country", m.location.country_name.as_deref(), "country"));
    lines.push(key_value("City", m.location.city.as_deref(), "city"));
    if !m.hostnames.is_empty() {
        let names = m.hostnames.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        lines.push(key_value("Hostname", Some(&*names), "dns"));
    }
    if let Some(cert) = m.certificate() {
        if let Some(cn) = cert.subject_field("CN") {
            lines.push(key_value("SSL CN", Some(cn), "ssl"));
        }
        if let Some(expires) = cert.expires.as_deref() {
            lines.push(key_value("SSL Expires", Some(expires), "time"));
        }
    }
    if !m.vulns.is_empty() {
        lines.push(format!(
            "\n{} **Vulnerabilities ({}):**",
            icon("vuln"),
            m.vulns.len()
        ));
        lines.extend(
            m.vulns
                .keys()
                .take(MATCH_VULNS)
                .map(|v| format!("  {} {}", icon("fire"), code(v))),
        );
        lines.extend(more(m.vulns.len().saturating_sub(MATCH_VULNS)));
    }
    if let Some(data) = m.data.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        lines.push(format!("\n{} **Banner:**", icon("folder")));
        lines.push(format!("```\n{}\n```", truncate(data, 200).replace("```", "ˋˋˋ")));
    }
    if let Some(ts) = m.timestamp.as_deref() {
        lines.push(format!("{} *Last seen: {}*", icon("time"), timestamp(ts)));
    }
    lines.join("\n")
}

pub fn count_result(query: &str, result: &CountResult) -> String {
    format!(
        "{}\n\n{} **Total:** {} results\n{} *Counting does not use query credits.*{}",
        header("Count Result", Some(&*format!("Query: {query}"))),
        icon("stats"),
        group_thousands(result.total),
        icon("info"),
        facets(&result.facets)
    )
}

pub fn host_info(host: &HostInfo) -> Vec<String> {
    let ip = host.ip_str.as_deref().unwrap_or("N/A");
    let mut lines = vec![
        header(&format!("Host: {ip}"), Some(&*format!("Full record for {ip}"))),
        section("General", "host"),
        key_value("IP Address", host.ip_str.as_deref(), "ip"),
        key_value("Organization", host.org.as_deref(), "org"),
        key_value("ISP", host.isp.as_deref(), "isp"),
        key_value("ASN", host.asn.as_deref(), "globe"),
        key_value("OS", host.os.as_deref(), "os"),
        key_value("Country", host.country_name.as_deref(), "country"),
        key_value("City", host.city.as_deref(), "city"),
    ];
    if !host.hostnames.is_empty() {
        let names = host.hostnames.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
        lines.push(key_value("Hostnames", Some(&*names), "dns"));
    }
    if let Some(updated) = host.last_update.as_deref() {
        lines.push(format!(
            "{} **Last Update:** {}",
            icon("time"),
            timestamp(updated)
        ));
    }
    if !host.ports.is_empty() {
        let mut ports = host.ports.clone();
        ports.sort_unstable();
        lines.push(section(&format!("Open Ports ({})", ports.len()), "port"));
        let shown: Vec<String> = ports.iter().take(HOST_PORTS).map(u16::to_string).collect();
        lines.push(code(&shown.join(", ")));
    }
    if !host.vulns.is_empty() {
        lines.push(section(&format!("Vulnerabilities ({})", host.vulns.len()), "vuln"));
        lines.extend(
            host.vulns
                .iter()
                .take(HOST_VULNS)
                .map(|v| format!("{} {}", icon("fire"), code(v))),
        );
        lines.extend(more(host.vulns.len().saturating_sub(HOST_VULNS)));
    }
    let mut out = vec![lines.join("\n")];
    out.extend(host.data.iter().take(HOST_SERVICES).map(service_card));
    out
}

pub fn service_card(svc: &Banner) -> String {
    let port = svc.port.map(|p| p.to_string()).unwrap_or_else(|| "?".into());
    let transport = svc.transport.as_deref().unwrap_or("tcp");
    let mut lines = vec![format!(
        "{} **Port {}/{}**",
        icon("port"),
        port,
        escape(transport)
    )];
    if let Some(product) = svc.product.as_deref() {
        let full = format!("{product} {}", svc.version.as_deref().unwrap_or("")).trim().to_string();
        lines.push(key_value("Product", Some(&*full), "product"));
    }
    if let Some(module) = svc.crawler.as_ref().and_then(|c| c.module.as_deref()) {
        lines.push(key_value("Module", Some(module), "gear"));
    }
    if let Some(http) = &svc.http {
        if let Some(title) = http.title.as_deref() {
            lines.push(key_value("Title", Some(&*truncate(title, 80)), "globe"));
        }
        if let Some(status) = http.status {
            lines.push(key_value("Status", Some(&*status.to_string()), "check"));
        }
        if let Some(server) = http.server.as_deref() {
            lines.push(key_value("Server", Some(server), "host"));
        }
    }
    if let Some(cert) = svc.certificate() {
        if let Some(cn) = cert.subject_field("CN") {
            lines.push(key_value("SSL CN", Some(cn), "ssl"));
        }
        if let Some(issuer) = cert.issuer_field("O") {
            lines.push(key_value("Issuer", Some(issuer), "lock"));
        }
    }
    if let Some(data) = svc.data.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        lines.push(format!("{} **Banner:**", icon("folder")));
        lines.push(format!("```\n{}\n```", truncate(data, 300).replace("```", "ˋˋˋ")));
    }
    lines.join("\n")
}

pub fn dns_resolve(data: &DnsResolve) -> String {
    let mut lines = vec![header("DNS Resolve", None)];
    for (host, ip) in data {
        lines.push(format!("{} {}", icon("dns"), code(host)));
        lines.push(format!(
            "    {} {}",
            icon("arrow"),
            code(ip.as_deref().unwrap_or("unresolved"))
        ));
    }
    lines.join("\n")
}

pub fn dns_reverse(data: &DnsReverse) -> String {
    let mut lines = vec![header("Reverse DNS", None)];
    for (ip, names) in data {
        lines.push(format!("{} {}", icon("ip"), code(ip)));
        match names.as_deref() {
            Some(names) if !names.is_empty() => lines.extend(
                names
                    .iter()
                    .map(|n| format!("    {} {}", icon("arrow"), code(n))),
            ),
            _ => lines.push(format!("    {} *no hostnames*", icon("arrow"))),
        }
    }
    lines.join("\n")
}

pub fn domain_info(info: &DomainInfo) -> String {
    let domain = info.domain.as_str();
    let mut lines = vec![header(&format!("Domain: {domain}"), None), section("Subdomains", "dns")];
    lines.extend(
        info.subdomains
            .iter()
            .take(SUBDOMAINS)
            .map(|s| format!("{} {}", icon("dot"), code(&format!("{s}.{domain}")))),
    );
    lines.extend(more(info.subdomains.len().saturating_sub(SUBDOMAINS)));
    if !info.records.is_empty() {
        lines.push(section("DNS Records", "globe"));
        for r in info.records.iter().take(DNS_RECORDS) {
            let name = if r.subdomain.is_empty() {
                domain.to_string()
            } else {
                format!("{}.{domain}", r.subdomain)
            };
            lines.push(format!(
                "**{}** {} ➜ {}",
                escape(r.kind.as_deref().unwrap_or("?")),
                code(&name),
                code(&value_text(&r.value))
            ));
        }
    }
    lines.join("\n")
}

pub fn exploits(query: &str, result: &ExploitResult) -> Vec<String> {
    let mut out = vec![format!(
        "{}\n\n{} **Total:** {} exploits found",
        header("Exploit Search", Some(&*format!("Query: {query}"))),
        icon("stats"),
        group_thousands(result.total)
    )];
    for (i, e) in result.matches.iter().take(EXPLOITS).enumerate() {
        let id = value_text(&e.id);
        let mut lines = vec![
            format!("{} **Exploit #{}**", icon("exploit"), i + 1),
            key_value("ID", Some(&*id), "key"),
            key_value("Source", e.source.as_deref(), "link"),
            key_value("Type", e.kind.as_deref(), "tag"),
        ];
        if !e.cve.is_empty() {
            let cves = e.cve.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
            lines.push(key_value("CVE", Some(&*cves), "vuln"));
        }
        let desc = e.description.as_deref().unwrap_or("N/A");
        lines.push(format!("{} **Description:**", icon("info")));
        lines.push(format!("*{}*", escape(&truncate(desc.trim(), 300))));
        out.push(lines.join("\n"));
    }
    if result.matches.is_empty() {
        out.push(format!("{} *No exploits found.*", icon("warning")));
    }
    out
}

pub fn account_info(info: &AccountInfo) -> String {
    [
        header("Shodan Account Info", None),
        key_value("Plan", Some(&*info.plan), "star"),
        key_value("Query Credits", Some(&*signed_thousands(info.query_credits)), "search"),
        key_value("Scan Credits", Some(&*signed_thousands(info.scan_credits)), "ip"),
        key_value(
            "Unlocked",
            Some(if info.unlocked { "Yes ✅" } else { "No" }),
            "lock",
        ),
        key_value("Unlocked Left", Some(&*signed_thousands(info.unlocked_left)), "key"),
    ]
    .join("\n")
}

pub fn scan_submitted(scan: &ScanSubmission, prefix: &str) -> String {
    [
        header("Scan Submitted", None),
        key_value("Scan ID", Some(&*scan.id), "key"),
        key_value("IPs to scan", Some(&*scan.count.to_string()), "ip"),
        key_value("Credits left", Some(&*scan.credits_left.to_string()), "stats"),
        format!(
            "\n{} *Use {} to follow progress.*",
            icon("info"),
            code(&format!("{prefix}scanstatus {}", scan.id))
        ),
    ]
    .join("\n")
}

pub fn scan_status(status: &ScanStatus) -> String {
    let emoji = match status.status.as_str() {
        "DONE" => icon("success"),
        "SUBMITTING" => icon("hourglass"),
        "QUEUE" => icon("dns"),
        _ => "❓",
    };
    let label = if status.status.is_empty() { "unknown" } else { status.status.as_str() };
    [
        header("Scan Status", None),
        key_value("Scan ID", Some(&*status.id), "key"),
        format!("{emoji} **Status:** {}", escape(label)),
    ]
    .join("\n")
}

pub fn honeypot(ip: &str, score: f64) -> String {
    if score < 0.0 {
        return format!(
            "{} Could not check the honeypot score for {}",
            icon("error"),
            code(ip)
        );
    }
    let verdict = if score >= HONEYPOT_LIKELY {
        format!("{} **Very likely a HONEYPOT**", icon("honeypot"))
    } else if score >= HONEYPOT_MAYBE {
        format!("{} **Possibly a honeypot**", icon("warning"))
    } else {
        format!("{} **Probably not a honeypot**", icon("success"))
    };
    let cells = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64) as u64;
    [
        header("Honeypot Detection", Some(&*format!("IP: {ip}"))),
        key_value("IP", Some(ip), "ip"),
        format!("{} **Score:** {score:.2} / 1.00", icon("honeypot")),
        bar(cells, BAR_WIDTH as u64, BAR_WIDTH),
        format!("\n{verdict}"),
    ]
    .join("\n")
}

pub fn filters_help() -> String {
    let group = |key: &str, title: &str, rows: &[(&str, &str)]| {
        let mut s = format!("{} **{title}:**", icon(key));
        for (filter, what) in rows {
            s.push_str(&format!("\n{} | {what}", code(filter)));
        }
        s
    };
    [
        format!("{} **SHODAN FILTER REFERENCE**\n{}", icon("search"), rule()),
        group("globe", "Location", &[
            (r#"country:"ID""#, "Country code"),
            (r#"city:"Jakarta""#, "City"),
            (r#"region:"West Java""#, "Region / province"),
        ]),
        group("org", "Organization", &[
            (r#"org:"Telkom""#, "Organization name"),
            (r#"isp:"Telkomsel""#, "ISP name"),
            ("asn:AS17974", "AS number"),
            ("net:202.134.0.0/16", "CIDR subnet"),
        ]),
        group("port", "Service", &[
            ("port:22", "Port number"),
            (r#"product:"nginx""#, "Product name"),
            (r#"version:"1.19""#, "Product version"),
            (r#"os:"Windows""#, "Operating system"),
        ]),
        group("globe", "HTTP", &[
            (r#"http.title:"Login""#, "Page title"),
            (r#"http.server:"Apache""#, "Web server"),
            ("http.status:200", "Status code"),
            (r#"http.component:"jQuery""#, "Web technology"),
            ("http.favicon.hash:NNN", "Favicon hash"),
        ]),
        group("ssl", "SSL/TLS", &[
            (r#"ssl.cert.subject.CN:"*.example.com""#, "Certificate CN"),
            (r#"ssl.cert.subject.O:"Org Name""#, "Certificate org"),
            ("ssl.cert.expired:true", "Expired certificate"),
            ("has_ssl:true", "Any TLS service"),
        ]),
        group("vuln", "Vulnerability", &[
            (r#"vuln:"CVE-2021-44228""#, "Specific CVE"),
            ("has_vuln:true", "Has any vulnerability"),
            (r#"tag:"ics""#, "ICS/SCADA tag"),
        ]),
        group("dns", "DNS", &[
            (r#"hostname:".go.id""#, "Hostname"),
            ("has_screenshot:true", "Has a screenshot"),
        ]),
        group("info", "Others", &[
            (r#"before:"01/01/2024""#, "Seen before date"),
            (r#"after:"01/01/2024""#, "Seen after date"),
            (r#""keyword""#, "Match in banner"),
        ]),
        format!(
            "{} **Combining:**\nJoin filters with spaces: {}",
            icon("star"),
            code(r#"product:"nginx" country:"ID" port:443"#)
        ),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_code() {
        assert_eq!(escape("a*b_c"), "a\\*b\\_c");
        assert_eq!(code("x`y"), "`xˋy`");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(signed_thousands(-1000), "-1,000");
    }

    #[test]
    fn long_bodies_are_chunked_on_lines() {
        let line = "x".repeat(1000);
        let body = vec![line.as_str(); 8].join("\n");
        let parts = chunk(&body);
        assert!(parts.len() >= 3);
        assert!(parts.iter().all(|p| p.chars().count() <= MAX_MESSAGE_LENGTH));
    }

    #[test]
    fn timestamps_are_humanized() {
        assert_eq!(timestamp("2024-05-01T10:20:30.123456"), "2024-05-01 10:20 UTC");
        assert_eq!(timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn honeypot_verdicts_follow_thresholds() {
        assert!(honeypot("1.1.1.1", 0.9).contains("Very likely"));
        assert!(honeypot("1.1.1.1", 0.5).contains("Possibly"));
        assert!(honeypot("1.1.1.1", 0.1).contains("Probably not"));
        assert!(honeypot("1.1.1.1", -1.0).contains("Could not"));
    }
}
