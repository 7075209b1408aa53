use super::{
    AccountInfo, ApiResult, CountResult, DnsResolve, DnsReverse, DomainInfo, ExploitResult,
    HostInfo, ScanStatus, ScanSubmission, SearchResult, ShodanApi, normalize_facets,
};
use crate::cache::TtlSlot;
use crate::constants::{PAGE_SIZE, UPSTREAM_PAGE_SIZE};
use crate::error::ShodanError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;

const API_BASE: &str = "https://api.shodan.io";
const EXPLOITS_BASE: &str = "https://exploits.shodan.io/api";

/// HTTPS client for the Shodan REST API. Shared process-wide behind an `Arc`.
pub struct ShodanClient {
    http: Client,
    key: String,
    api_base: String,
    exploits_base: String,
    account: RwLock<TtlSlot<AccountInfo>>,
}

impl ShodanClient {
    pub fn new(key: impl Into<String>, timeout: Duration, account_ttl_secs: u64) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shodan_bot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            key: key.into(),
            api_base: API_BASE.to_string(),
            exploits_base: EXPLOITS_BASE.to_string(),
            account: RwLock::new(TtlSlot::from_secs(account_ttl_secs)),
        })
    }

    fn get(&self, base: &str, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{base}{path}"))
            .query(&[("key", self.key.as_str())])
    }

    async fn send_json<T: DeserializeOwned>(&self, path: &str, req: RequestBuilder) -> ApiResult<T> {
        tracing::debug!(target = "shodan.http", path = %path, "request");
        let resp = req.send().await.map_err(|e| {
            tracing::error!(target = "shodan.http", path = %path, error = %e, "request failed");
            ShodanError::from(e)
        })?;
        let status = resp.status();
        let body = resp.text().await?;
        decode_body(status.as_u16(), &body).inspect_err(|e| {
            tracing::error!(target = "shodan.http", path = %path, status = status.as_u16(), error = %e, "api error");
        })
    }
}

/// Map a display page onto the upstream page that holds it and the offset inside it.
fn upstream_slice(display_page: u32) -> (u32, usize) {
    let first = u64::from(display_page.max(1) - 1) * u64::from(PAGE_SIZE);
    let upstream = u64::from(UPSTREAM_PAGE_SIZE);
    let page = u32::try_from(first / upstream + 1).unwrap_or(u32::MAX);
    (page, (first % upstream) as usize)
}

/// Turn an API response body into `T`, surfacing the `{"error": ...}` convention.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !(200..300).contains(&status) => {
            let text = body.trim();
            return Err(ShodanError::Api(if text.is_empty() {
                format!("HTTP {status}")
            } else {
                text.to_string()
            }));
        }
        Err(e) => return Err(ShodanError::Decode(e.to_string())),
    };
    if let Some(msg) = value.get("error").and_then(Value::as_str) {
        return Err(ShodanError::Api(msg.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ShodanError::Api(format!("HTTP {status}")));
    }
    serde_json::from_value(value).map_err(|e| ShodanError::Decode(e.to_string()))
}

#[async_trait]
impl ShodanApi for ShodanClient {
    async fn search(&self, query: &str, page: u32, facets: Option<&str>) -> ApiResult<SearchResult> {
        let (upstream_page, offset) = upstream_slice(page);
        let upstream_page = upstream_page.to_string();
        let mut req = self
            .get(&self.api_base, "/shodan/host/search")
            .query(&[("query", query), ("page", upstream_page.as_str())]);
        if let Some(f) = facets.and_then(normalize_facets) {
            req = req.query(&[("facets", f)]);
        }
        let mut result: SearchResult = self.send_json("/shodan/host/search", req).await?;
        result.matches = result
            .matches
            .into_iter()
            .skip(offset)
            .take(PAGE_SIZE as usize)
            .collect();
        Ok(result)
    }

    async fn count(&self, query: &str, facets: Option<&str>) -> ApiResult<CountResult> {
        let mut req = self
            .get(&self.api_base, "/shodan/host/count")
            .query(&[("query", query)]);
        if let Some(f) = facets.and_then(normalize_facets) {
            req = req.query(&[("facets", f)]);
        }
        self.send_json("/shodan/host/count", req).await
    }

    async fn host(&self, ip: &str) -> ApiResult<HostInfo> {
        let path = format!("/shodan/host/{}", ip.trim());
        let req = self.get(&self.api_base, &path);
        self.send_json(&path, req).await
    }

    async fn dns_resolve(&self, hostnames: &[String]) -> ApiResult<DnsResolve> {
        let req = self
            .get(&self.api_base, "/dns/resolve")
            .query(&[("hostnames", hostnames.join(","))]);
        self.send_json("/dns/resolve", req).await
    }

    async fn dns_reverse(&self, ips: &[String]) -> ApiResult<DnsReverse> {
        let req = self
            .get(&self.api_base, "/dns/reverse")
            .query(&[("ips", ips.join(","))]);
        self.send_json("/dns/reverse", req).await
    }

    async fn dns_domain(&self, domain: &str) -> ApiResult<DomainInfo> {
        let path = format!("/dns/domain/{}", domain.trim());
        let req = self.get(&self.api_base, &path);
        self.send_json(&path, req).await
    }

    async fn search_exploits(&self, query: &str) -> ApiResult<ExploitResult> {
        let req = self
            .get(&self.exploits_base, "/search")
            .query(&[("query", query)]);
        self.send_json("/exploits/search", req).await
    }

    async fn scan(&self, target: &str) -> ApiResult<ScanSubmission> {
        let req = self
            .http
            .post(format!("{}/shodan/scan", self.api_base))
            .query(&[("key", self.key.as_str())])
            .form(&[("ips", target.trim())]);
        self.send_json("/shodan/scan", req).await
    }

    async fn scan_status(&self, id: &str) -> ApiResult<ScanStatus> {
        let path = format!("/shodan/scan/{}", id.trim());
        let req = self.get(&self.api_base, &path);
        self.send_json(&path, req).await
    }

    async fn honeyscore(&self, ip: &str) -> ApiResult<f64> {
        let path = format!("/labs/honeyscore/{}", ip.trim());
        let req = self.get(&self.api_base, &path);
        self.send_json(&path, req).await
    }

    async fn account_info(&self) -> ApiResult<AccountInfo> {
        if let Some(info) = self.account.read().await.get() {
            return Ok(info);
        }
        let req = self.get(&self.api_base, "/api-info");
        let info: AccountInfo = self.send_json("/api-info", req).await?;
        self.account.write().await.insert(info.clone());
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pages_map_onto_upstream_pages() {
        assert_eq!(upstream_slice(1), (1, 0));
        assert_eq!(upstream_slice(2), (1, 5));
        assert_eq!(upstream_slice(10), (1, 45));
        assert_eq!(upstream_slice(21), (2, 0));
    }

    #[test]
    fn error_field_becomes_api_error() {
        let err = decode_body::<SearchResult>(401, r#"{"error": "Invalid API key"}"#).unwrap_err();
        assert_eq!(err, ShodanError::Api("Invalid API key".into()));
    }

    #[test]
    fn plain_text_failure_is_kept() {
        let err = decode_body::<SearchResult>(503, "Service Unavailable").unwrap_err();
        assert_eq!(err, ShodanError::Api("Service Unavailable".into()));
    }

    #[test]
    fn honeyscore_body_is_a_bare_number() {
        let score: f64 = decode_body(200, "0.3").expect("score");
        assert!((score - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn search_body_decodes_with_missing_fields() {
        let body = r#"{"matches":[{"ip_str":"1.2.3.4","port":22,"vulns":{"CVE-1":{}}}],"total":12}"#;
        let res: SearchResult = decode_body(200, body).expect("search");
        assert_eq!(res.total, 12);
        assert_eq!(res.matches[0].port, Some(22));
        assert!(res.facets.is_empty());
    }
}
