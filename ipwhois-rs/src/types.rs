use serde::{Deserialize, Serialize};

pub const BASE_URL: &str = "https://ipwhois.app/json";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const USER_AGENT: &str = concat!("ipwhois-rs/", env!("CARGO_PKG_VERSION"));

/// Fallback used when the service reports failure without a message.
pub const FALLBACK_ERROR_MESSAGE: &str = "API returned an error";

#[derive(Debug, Clone)]
pub struct Config {
    pub protocol: String,
    pub host: String,
    pub path: String,
    pub user_agent: String,
}

impl Config {
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.protocol, self.host, self.path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            host: "ipwhois.app".to_string(),
            path: "/json".to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Per-call lookup options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// IP address to look up. `None` resolves the caller's own address.
    pub ip: Option<String>,
    /// Request timeout in milliseconds, [`DEFAULT_TIMEOUT_MS`] when unset.
    pub timeout_ms: Option<u64>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

/// Response from the ipwhois.app API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpWhoisResponse {
    #[serde(rename = "About_Us")]
    pub about_us: String,
    pub ip: String,
    pub success: bool,
    #[serde(rename = "type")]
    pub ip_type: String,
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub country_flag: String,
    pub country_capital: String,
    pub country_phone: String,
    pub country_neighbours: String,
    pub region: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub asn: String,
    pub org: String,
    pub isp: String,
    pub timezone: String,
    pub timezone_name: String,
    #[serde(rename = "timezone_dstOffset")]
    pub timezone_dst_offset: i64,
    #[serde(rename = "timezone_gmtOffset")]
    pub timezone_gmt_offset: i64,
    pub timezone_gmt: String,
    pub currency: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub currency_rates: f64,
    pub currency_plural: String,
}

/// Body the service sends (with HTTP 200) when a lookup fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpWhoisFailure {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl IpWhoisFailure {
    pub fn message_or_fallback(&self) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
