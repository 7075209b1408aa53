//! The scanning API seam. The conversation flow only ever talks to `ShodanApi`;
//! `ShodanClient` is the HTTPS implementation used in production.

pub mod client;
pub mod types;

pub use client::ShodanClient;
pub use types::*;

use crate::constants::{DEFAULT_FACET_COUNT, HONEYPOT_UNAVAILABLE};
use crate::error::ShodanError;
use async_trait::async_trait;

pub type ApiResult<T> = Result<T, ShodanError>;

#[async_trait]
pub trait ShodanApi: Send + Sync {
    /// Search banners. `page` is the 1-based result page of `PAGE_SIZE` matches.
    async fn search(&self, query: &str, page: u32, facets: Option<&str>) -> ApiResult<SearchResult>;
    /// Count matches without spending query credits.
    async fn count(&self, query: &str, facets: Option<&str>) -> ApiResult<CountResult>;
    async fn host(&self, ip: &str) -> ApiResult<HostInfo>;
    async fn dns_resolve(&self, hostnames: &[String]) -> ApiResult<DnsResolve>;
    async fn dns_reverse(&self, ips: &[String]) -> ApiResult<DnsReverse>;
    async fn dns_domain(&self, domain: &str) -> ApiResult<DomainInfo>;
    async fn search_exploits(&self, query: &str) -> ApiResult<ExploitResult>;
    async fn scan(&self, target: &str) -> ApiResult<ScanSubmission>;
    async fn scan_status(&self, id: &str) -> ApiResult<ScanStatus>;
    async fn honeyscore(&self, ip: &str) -> ApiResult<f64>;
    async fn account_info(&self) -> ApiResult<AccountInfo>;

    /// Honeypot score in `[0, 1]`, or `HONEYPOT_UNAVAILABLE` when the lookup failed.
    async fn honeypot_score(&self, ip: &str) -> f64 {
        match self.honeyscore(ip).await {
            Ok(score) => score,
            Err(e) => {
                tracing::error!(target = "shodan.honeypot", ip = %ip, error = %e, "honeyscore failed");
                HONEYPOT_UNAVAILABLE
            }
        }
    }
}

/// Normalize a facet spec such as `org:10, port` into `org:10,port:10`.
/// Returns `None` when nothing usable remains.
pub fn normalize_facets(spec: &str) -> Option<String> {
    let parts: Vec<String> = spec
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| match f.split_once(':') {
            Some((name, count)) if count.trim().parse::<u32>().is_ok() => {
                format!("{}:{}", name.trim(), count.trim())
            }
            Some((name, _)) => format!("{}:{DEFAULT_FACET_COUNT}", name.trim()),
            None => format!("{f}:{DEFAULT_FACET_COUNT}"),
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join(","))
}
