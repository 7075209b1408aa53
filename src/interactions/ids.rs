//! Centralized callback token (component `custom_id`) namespaces and codec.
//! Tokens have the shape `<namespace>:<arg1>[:<arg2>]` and must fit in `MAX_CUSTOM_ID_LEN` bytes.

use crate::constants::MAX_CUSTOM_ID_LEN;
use crate::templates::Category;

pub const MENU: &str = "menu";
pub const CMD: &str = "cmd";
pub const CAT: &str = "cat";
pub const TMPL: &str = "tmpl";
pub const USE: &str = "use";
pub const EXAMPLE: &str = "example";
pub const PAGE: &str = "page";
pub const DNS: &str = "dns";
pub const DOSCAN: &str = "doscan";
pub const DEFAULT: &str = "default";
pub const NOOP: &str = "noop";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTarget {
    Main,
    Templates,
    Host,
    Dns,
    Exploits,
    Vuln,
    Raw,
    Count,
}

impl MenuTarget {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Templates => "templates",
            Self::Host => "host",
            Self::Dns => "dns",
            Self::Exploits => "exploits",
            Self::Vuln => "vuln",
            Self::Raw => "raw",
            Self::Count => "count",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "main" => Self::Main,
            "templates" => Self::Templates,
            "host" => Self::Host,
            "dns" => Self::Dns,
            "exploits" => Self::Exploits,
            "vuln" => Self::Vuln,
            "raw" => Self::Raw,
            "count" => Self::Count,
            _ => return None,
        })
    }
}

/// Immediate informational actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoAction {
    Account,
    Filters,
    Help,
}

impl InfoAction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "info",
            Self::Filters => "filters",
            Self::Help => "help",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "info" => Self::Account,
            "filters" => Self::Filters,
            "help" => Self::Help,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DnsTool {
    Resolve,
    Reverse,
    Domain,
}

impl DnsTool {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Reverse => "reverse",
            Self::Domain => "domain",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "resolve" => Self::Resolve,
            "reverse" => Self::Reverse,
            "domain" => Self::Domain,
            _ => return None,
        })
    }
}

/// A decoded button press.
///
/// Arguments that came from operator input (`page` query, `doscan` target, `default`
/// value) may be empty when they did not fit the size limit; the router then resolves
/// them from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackToken {
    Menu(MenuTarget),
    Cmd(InfoAction),
    Category(Category),
    Template(String),
    Use(String),
    Example(String),
    Page { page: u32, query: String },
    Dns(DnsTool),
    DoScan(String),
    Default { param: String, value: String },
    Noop,
}

impl CallbackToken {
    /// Decode a raw token. Unknown namespaces and malformed arguments yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == NOOP {
            return Some(Self::Noop);
        }
        let (namespace, rest) = raw.split_once(':')?;
        let token = match namespace {
            MENU => Self::Menu(MenuTarget::parse(rest)?),
            CMD => Self::Cmd(InfoAction::parse(rest)?),
            CAT => Self::Category(rest.parse().ok()?),
            TMPL => Self::Template(non_empty(rest)?),
            USE => Self::Use(non_empty(rest)?),
            EXAMPLE => Self::Example(non_empty(rest)?),
            DNS => Self::Dns(DnsTool::parse(rest)?),
            DOSCAN => Self::DoScan(rest.to_string()),
            // Only the first delimiter after the page number splits; the query keeps its own `:`.
            PAGE => {
                let (page, query) = rest.split_once(':')?;
                let page: u32 = page.parse().ok()?;
                if page == 0 {
                    return None;
                }
                Self::Page {
                    page,
                    query: query.to_string(),
                }
            }
            DEFAULT => {
                let (param, value) = rest.split_once(':')?;
                Self::Default {
                    param: non_empty(param)?,
                    value: value.to_string(),
                }
            }
            _ => return None,
        };
        Some(token)
    }

    /// Encode into a token string no longer than `MAX_CUSTOM_ID_LEN` bytes.
    pub fn encode(&self) -> String {
        match self {
            Self::Menu(t) => format!("{MENU}:{}", t.as_str()),
            Self::Cmd(a) => format!("{CMD}:{}", a.as_str()),
            Self::Category(c) => format!("{CAT}:{}", c.id()),
            Self::Template(id) => format!("{TMPL}:{id}"),
            Self::Use(id) => format!("{USE}:{id}"),
            Self::Example(id) => format!("{EXAMPLE}:{id}"),
            Self::Page { page, query } => fit(format!("{PAGE}:{page}:"), query),
            Self::Dns(t) => format!("{DNS}:{}", t.as_str()),
            Self::DoScan(target) => fit(format!("{DOSCAN}:"), target),
            Self::Default { param, value } => fit(format!("{DEFAULT}:{param}:"), value),
            Self::Noop => NOOP.to_string(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Append `arg` to `head` unless the result would exceed the custom_id limit,
/// in which case the argument is left out.
fn fit(head: String, arg: &str) -> String {
    if head.len() + arg.len() <= MAX_CUSTOM_ID_LEN {
        head + arg
    } else {
        head
    }
}

pub fn page_token(page: u32, query: &str) -> String {
    CallbackToken::Page {
        page,
        query: query.to_string(),
    }
    .encode()
}
