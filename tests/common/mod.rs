//! In-memory fakes for the scanning API and the chat transport.
#![allow(dead_code)]

use async_trait::async_trait;
use shodan_bot::error::ShodanError;
use shodan_bot::flow::{AuthGate, Engine, Inbound, Outbox, Reply};
use shodan_bot::session::{ConversationKey, InMemorySessionStore};
use shodan_bot::shodan::*;
use std::sync::{Arc, Mutex};

pub const CHANNEL: u64 = 10;
pub const USER: u64 = 42;

/// Records every call; answers with canned data or a configured error.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub search_total: Mutex<u64>,
    pub fail_with: Mutex<Option<ShodanError>>,
}

impl FakeApi {
    pub fn with_total(total: u64) -> Self {
        let api = Self::default();
        *api.search_total.lock().unwrap() = total;
        api
    }

    pub fn failing(err: ShodanError) -> Self {
        let api = Self::default();
        *api.fail_with.lock().unwrap() = Some(err);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn banner(i: u64) -> Banner {
    Banner {
        ip_str: Some(format!("10.0.0.{i}")),
        port: Some(22),
        org: Some("Example Org".into()),
        ..Banner::default()
    }
}

#[async_trait]
impl ShodanApi for FakeApi {
    async fn search(&self, query: &str, page: u32, facets: Option<&str>) -> ApiResult<SearchResult> {
        self.record(format!("search|{query}|{page}|{}", facets.unwrap_or("")))?;
        let total = *self.search_total.lock().unwrap();
        Ok(SearchResult {
            matches: (0..total.min(100)).map(banner).collect(),
            total,
            facets: Facets::new(),
        })
    }

    async fn count(&self, query: &str, facets: Option<&str>) -> ApiResult<CountResult> {
        self.record(format!("count|{query}|{}", facets.unwrap_or("")))?;
        Ok(CountResult {
            total: 7,
            facets: Facets::new(),
        })
    }

    async fn host(&self, ip: &str) -> ApiResult<HostInfo> {
        self.record(format!("host|{ip}"))?;
        Ok(HostInfo {
            ip_str: Some(ip.to_string()),
            org: Some("Google LLC".into()),
            ports: vec![53, 443],
            ..HostInfo::default()
        })
    }

    async fn dns_resolve(&self, hostnames: &[String]) -> ApiResult<DnsResolve> {
        self.record(format!("dns_resolve|{}", hostnames.join(",")))?;
        Ok(hostnames
            .iter()
            .map(|h| (h.clone(), Some("93.184.216.34".to_string())))
            .collect())
    }

    async fn dns_reverse(&self, ips: &[String]) -> ApiResult<DnsReverse> {
        self.record(format!("dns_reverse|{}", ips.join(",")))?;
        Ok(ips
            .iter()
            .map(|ip| (ip.clone(), Some(vec!["dns.google".to_string()])))
            .collect())
    }

    async fn dns_domain(&self, domain: &str) -> ApiResult<DomainInfo> {
        self.record(format!("dns_domain|{domain}"))?;
        Ok(DomainInfo {
            domain: domain.to_string(),
            subdomains: vec!["www".into()],
            records: Vec::new(),
        })
    }

    async fn search_exploits(&self, query: &str) -> ApiResult<ExploitResult> {
        self.record(format!("exploits|{query}"))?;
        Ok(ExploitResult::default())
    }

    async fn scan(&self, target: &str) -> ApiResult<ScanSubmission> {
        self.record(format!("scan|{target}"))?;
        Ok(ScanSubmission {
            id: "SCAN1".into(),
            count: 1,
            credits_left: 99,
        })
    }

    async fn scan_status(&self, id: &str) -> ApiResult<ScanStatus> {
        self.record(format!("scan_status|{id}"))?;
        Ok(ScanStatus {
            id: id.to_string(),
            status: "DONE".into(),
            count: 1,
        })
    }

    async fn honeyscore(&self, ip: &str) -> ApiResult<f64> {
        self.record(format!("honeyscore|{ip}"))?;
        Ok(0.9)
    }

    async fn account_info(&self) -> ApiResult<AccountInfo> {
        self.record("account_info".to_string())?;
        Ok(AccountInfo {
            plan: "dev".into(),
            query_credits: 100,
            scan_credits: 10,
            ..AccountInfo::default()
        })
    }
}

/// Captures acknowledgements and replies. `reject_rich` makes every non-plain send fail.
#[derive(Default)]
pub struct RecordingOutbox {
    pub acks: Mutex<Vec<Option<String>>>,
    pub replies: Mutex<Vec<Reply>>,
    pub reject_rich: bool,
}

impl RecordingOutbox {
    pub fn rejecting_rich() -> Self {
        Self {
            reject_rich: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn acks(&self) -> Vec<Option<String>> {
        self.acks.lock().unwrap().clone()
    }

    pub fn last(&self) -> Reply {
        self.replies().last().cloned().expect("at least one reply")
    }

    pub fn bodies(&self) -> String {
        self.replies()
            .iter()
            .map(|r| r.body.as_str())
            .collect::<Vec<_>>()
            .join("\n---\n")
    }

    pub fn clear(&self) {
        self.acks.lock().unwrap().clear();
        self.replies.lock().unwrap().clear();
    }
}

#[async_trait]
impl Outbox for RecordingOutbox {
    async fn acknowledge(&self, notice: Option<&str>) -> anyhow::Result<()> {
        self.acks.lock().unwrap().push(notice.map(str::to_string));
        Ok(())
    }

    async fn send(&self, reply: &Reply) -> anyhow::Result<()> {
        if self.reject_rich && !reply.plain {
            anyhow::bail!("embed rejected");
        }
        self.replies.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

pub fn engine(api: Arc<FakeApi>, gate: AuthGate) -> Engine {
    engine_with_store(api, gate).0
}

/// Engine plus a handle on its session store.
pub fn engine_with_store(api: Arc<FakeApi>, gate: AuthGate) -> (Engine, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let engine = Engine::new(api, store.clone(), gate, "!");
    (engine, store)
}

pub fn key() -> ConversationKey {
    ConversationKey::new(CHANNEL, USER)
}

pub fn inbound<'a>(outbox: &'a RecordingOutbox, direct_message: bool) -> Inbound<'a> {
    Inbound {
        key: key(),
        direct_message,
        outbox,
    }
}

pub fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
