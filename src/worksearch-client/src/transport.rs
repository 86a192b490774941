use serde_json::Value;

use crate::{Config, Error, Result};

/// Client name reported in the `User-Agent` header.
pub const CLIENT_NAME: &str = "worksearch-rs";

/// Environment toggle that disables TLS certificate verification. This is a
/// development enablement option for HTTPS-inspecting proxies that present
/// self-signed certificates; it is intentionally not part of `Config`.
pub(crate) const SSL_VERIFY_NONE_ENV: &str = "WORKSEARCH_SSL_VERIFY_NONE";

/// HTTP verbs the service speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request parameters: string keys mapped to scalar or array values.
pub type Params = serde_json::Map<String, Value>;

/// `<name>/<version> (<os>; <arch>)`
pub(crate) fn user_agent() -> String {
    format!(
        "{}/{} ({}; {})",
        CLIENT_NAME,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Flatten params into form-encoded pairs. Array values expand to one pair
/// per element under the same key.
pub(crate) fn query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_string(other))),
        }
    }
    pairs
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Build the `reqwest::Client` backing one `Client` instance: timeouts,
/// optional proxy, trust-store overrides.
pub(crate) fn build_http(config: &Config) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(config.open_timeout())
        .timeout(config.overall_timeout());

    match &config.proxy {
        Some(proxy_url) => {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| Error::InvalidUrl(format!("{proxy_url}: {e}")))?;
            builder = builder.proxy(proxy);
        }
        // Connect directly; ambient proxy environment variables do not
        // apply.
        None => builder = builder.no_proxy(),
    }

    if let Some(path) = &config.ca_bundle {
        let pem = std::fs::read(path).map_err(|source| Error::CaBundle {
            path: path.clone(),
            source,
        })?;
        let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(Error::Transport)?;
        builder = builder.tls_built_in_root_certs(false);
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
    }

    if std::env::var(SSL_VERIFY_NONE_ENV).as_deref() == Ok("true") {
        tracing::debug!("TLS certificate verification disabled via {SSL_VERIFY_NONE_ENV}");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(Error::Transport)
}
