use std::time::Duration;

use crate::errors::IpWhoisError;
use crate::types::Config;
use reqwest::Client;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

/// Base endpoint, with `ip` appended as a path segment when present.
pub fn lookup_url(config: &Config, ip: Option<&str>) -> String {
    match ip {
        Some(ip) if !ip.is_empty() => format!("{}/{}", config.base_url(), ip),
        _ => config.base_url(),
    }
}

#[cfg_attr(feature = "tracing", instrument(skip(config)))]
pub async fn send_request(
    config: &Config,
    url: &str,
    timeout_ms: u64,
) -> Result<Value, IpWhoisError> {
    if timeout_ms == 0 {
        return Err(IpWhoisError::Other(
            "timeout must be a positive number of milliseconds".into(),
        ));
    }

    let client = Client::new();
    #[cfg(feature = "tracing")]
    debug!(%url, timeout_ms, "Sending request to ipwhois");

    let request = client
        .get(url)
        .header("Accept", "application/json")
        .header("User-Agent", &config.user_agent)
        .send();

    // The timer lives only as long as this await.
    let res = match tokio::time::timeout(Duration::from_millis(timeout_ms), request).await {
        Ok(res) => res?,
        Err(_) => {
            #[cfg(feature = "tracing")]
            error!(%url, timeout_ms, "ipwhois request timed out");
            return Err(IpWhoisError::Timeout { timeout_ms });
        }
    };

    let status = res.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        error!(status = ?status, "ipwhois returned error status");
        return Err(IpWhoisError::Transport { status });
    }

    let body = res.json::<Value>().await?;
    #[cfg(feature = "tracing")]
    info!(status = ?status, body = %body, "ipwhois request successful");
    Ok(body)
}
