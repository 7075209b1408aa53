// Central constants for paging, limits and upstream defaults.
pub const PAGE_SIZE: u32 = 5; // matches rendered per display page
pub const MAX_PAGES: u32 = 10; // bounds query credit usage on the upstream API
pub const UPSTREAM_PAGE_SIZE: u32 = 100; // matches returned per upstream search page

// Discord caps embed descriptions at 4096 chars and plain content at 2000.
pub const MAX_MESSAGE_LENGTH: usize = 3900;
pub const MAX_PLAIN_LENGTH: usize = 1990;
pub const MAX_ERROR_LENGTH: usize = 500;

// Discord component limits.
pub const MAX_CUSTOM_ID_LEN: usize = 100;
pub const MAX_BUTTONS_PER_ROW: usize = 5;
pub const MAX_ROWS: usize = 5;
pub const MAX_LABEL_LEN: usize = 80;

pub const COUNT_FACETS: &str = "org:10,port:10,country:10";
pub const DEFAULT_FACET_COUNT: u32 = 10;

/// Score at or above which an IP is reported as a likely honeypot.
pub const HONEYPOT_LIKELY: f64 = 0.8;
pub const HONEYPOT_MAYBE: f64 = 0.5;
/// Returned by `honeypot_score` when the upstream lookup failed.
pub const HONEYPOT_UNAVAILABLE: f64 = -1.0;

/// Return the emoji used in front of a named output field.
pub fn icon(key: &str) -> &'static str {
    match key {
        "search" => "🔍",
        "host" => "🖥️",
        "ip" => "📡",
        "port" => "🔌",
        "vuln" => "🛡️",
        "country" => "🌍",
        "city" => "🏙️",
        "org" => "🏢",
        "isp" => "📶",
        "os" => "💻",
        "product" => "📦",
        "ssl" => "🔒",
        "warning" => "⚠️",
        "error" => "❌",
        "success" => "✅",
        "info" => "ℹ️",
        "stats" => "📊",
        "globe" => "🌐",
        "key" => "🔑",
        "time" => "🕐",
        "tag" => "🏷️",
        "link" => "🔗",
        "dns" => "📋",
        "exploit" => "💥",
        "honeypot" => "🍯",
        "star" => "⭐",
        "fire" => "🔥",
        "lock" => "🔐",
        "chart" => "📈",
        "folder" => "📁",
        "gear" => "⚙️",
        "rocket" => "🚀",
        "wave" => "👋",
        "right" => "▶️",
        "check" => "☑️",
        "dot" => "◽",
        "arrow" => "➜",
        "hourglass" => "⏳",
        _ => "◽",
    }
}
