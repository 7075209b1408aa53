//! Response models for the scanning API. Every field the API may omit is defaulted.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FacetBucket {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub count: u64,
}

impl FacetBucket {
    pub fn label(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => "N/A".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Facets = BTreeMap<String, Vec<FacetBucket>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Location {
    pub country_name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Certificate {
    #[serde(default)]
    pub subject: BTreeMap<String, Value>,
    #[serde(default)]
    pub issuer: BTreeMap<String, Value>,
    pub expires: Option<String>,
}

impl Certificate {
    pub fn subject_field(&self, key: &str) -> Option<&str> {
        self.subject.get(key).and_then(Value::as_str)
    }

    pub fn issuer_field(&self, key: &str) -> Option<&str> {
        self.issuer.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Ssl {
    pub cert: Option<Certificate>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HttpInfo {
    pub title: Option<String>,
    pub status: Option<u16>,
    pub server: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CrawlerMeta {
    pub module: Option<String>,
}

/// One service banner; used both for search matches and host services.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Banner {
    pub ip_str: Option<String>,
    pub port: Option<u16>,
    pub transport: Option<String>,
    pub org: Option<String>,
    pub isp: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub os: Option<String>,
    #[serde(default)]
    pub hostnames: Vec<String>,
    #[serde(default)]
    pub location: Location,
    /// CVE id keyed map in search results.
    #[serde(default)]
    pub vulns: BTreeMap<String, Value>,
    pub ssl: Option<Ssl>,
    pub http: Option<HttpInfo>,
    #[serde(rename = "_shodan")]
    pub crawler: Option<CrawlerMeta>,
    pub data: Option<String>,
    pub timestamp: Option<String>,
}

impl Banner {
    pub fn certificate(&self) -> Option<&Certificate> {
        self.ssl.as_ref().and_then(|s| s.cert.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub matches: Vec<Banner>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub facets: Facets,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CountResult {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub facets: Facets,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HostInfo {
    pub ip_str: Option<String>,
    pub org: Option<String>,
    pub isp: Option<String>,
    pub os: Option<String>,
    pub asn: Option<String>,
    pub country_name: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub hostnames: Vec<String>,
    #[serde(default)]
    pub ports: Vec<u16>,
    #[serde(default)]
    pub vulns: Vec<String>,
    pub last_update: Option<String>,
    #[serde(default)]
    pub data: Vec<Banner>,
}

/// hostname -> resolved address (null when unresolvable).
pub type DnsResolve = BTreeMap<String, Option<String>>;
/// ip -> hostnames (null when none).
pub type DnsReverse = BTreeMap<String, Option<Vec<String>>>;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DnsRecord {
    #[serde(default)]
    pub subdomain: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DomainInfo {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub subdomains: Vec<String>,
    #[serde(default, rename = "data")]
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Exploit {
    #[serde(default)]
    pub id: Value,
    pub description: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub cve: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ExploitResult {
    #[serde(default)]
    pub matches: Vec<Exploit>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ScanSubmission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub credits_left: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ScanStatus {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AccountInfo {
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub query_credits: i64,
    #[serde(default)]
    pub scan_credits: i64,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_left: i64,
}
