use crate::errors::IpWhoisError;
use crate::types::{Config, IpWhoisFailure, IpWhoisResponse, LookupOptions};
use crate::utils::{lookup_url, send_request};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct IpWhois {
    pub config: Arc<Config>,
}

impl IpWhois {
    pub fn init(config: Option<Config>) -> Self {
        Self {
            config: Arc::new(config.unwrap_or_default()),
        }
    }

    /// Looks up geolocation data for `options.ip`, or for the caller when no IP is set.
    ///
    /// A `{"success": false}` body is reported as [`IpWhoisError::Api`], never returned.
    pub async fn lookup(
        &self,
        options: Option<LookupOptions>,
    ) -> Result<IpWhoisResponse, IpWhoisError> {
        let options = options.unwrap_or_default();
        let url = lookup_url(&self.config, options.ip.as_deref());
        let body = send_request(&self.config, &url, options.effective_timeout_ms()).await?;
        into_response(body)
    }

    pub async fn get_ip_info(
        &self,
        ip: &str,
        timeout_ms: Option<u64>,
    ) -> Result<IpWhoisResponse, IpWhoisError> {
        self.lookup(Some(LookupOptions {
            ip: Some(ip.to_string()),
            timeout_ms,
        }))
        .await
    }

    pub async fn get_my_ip_info(
        &self,
        timeout_ms: Option<u64>,
    ) -> Result<IpWhoisResponse, IpWhoisError> {
        self.lookup(Some(LookupOptions { ip: None, timeout_ms })).await
    }
}

fn into_response(body: Value) -> Result<IpWhoisResponse, IpWhoisError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let failure: IpWhoisFailure = serde_json::from_value(body)?;
        return Err(IpWhoisError::Api(failure.message_or_fallback()));
    }
    Ok(serde_json::from_value(body)?)
}

/// Looks up an IP against ipwhois.app with the default [`Config`].
pub async fn ipwhois(options: Option<LookupOptions>) -> Result<IpWhoisResponse, IpWhoisError> {
    IpWhois::default().lookup(options).await
}

pub async fn get_ip_info(
    ip: &str,
    timeout_ms: Option<u64>,
) -> Result<IpWhoisResponse, IpWhoisError> {
    IpWhois::default().get_ip_info(ip, timeout_ms).await
}

pub async fn get_my_ip_info(timeout_ms: Option<u64>) -> Result<IpWhoisResponse, IpWhoisError> {
    IpWhois::default().get_my_ip_info(timeout_ms).await
}
