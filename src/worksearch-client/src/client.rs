use serde_json::{json, Value};

use crate::transport::{self, Method, Params};
use crate::{Config, Error, Result};

/// Worksearch REST API client.
///
/// Holds an immutable configuration and one connection-pooled HTTP client
/// built at construction. Cloning is cheap; clones share the pool. No
/// mutable state is carried between calls, so one instance can serve
/// concurrent callers.
#[derive(Clone)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

/// Page of results to request from a listing endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub current: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            current: 1,
            size: 20,
        }
    }
}

impl Page {
    pub(crate) fn to_params(self) -> Params {
        let mut params = Params::new();
        params.insert("page[current]".to_string(), json!(self.current));
        params.insert("page[size]".to_string(), json!(self.size));
        params
    }
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = transport::build_http(&config)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<Option<Value>> {
        self.execute(Method::Get, path, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> Result<Option<Value>> {
        self.execute(Method::Post, path, params).await
    }

    pub async fn put(&self, path: &str, params: Params) -> Result<Option<Value>> {
        self.execute(Method::Put, path, params).await
    }

    pub async fn delete(&self, path: &str, params: Params) -> Result<Option<Value>> {
        self.execute(Method::Delete, path, params).await
    }

    /// Construct and send one request to the API.
    ///
    /// GET/DELETE parameters become the query string; POST/PUT parameters
    /// become the JSON body, omitted entirely when empty. The status code
    /// is classified before the body is parsed; a blank 2xx body yields
    /// `Ok(None)`.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>> {
        let url = self.url_for(path);
        tracing::debug!(?method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method.as_reqwest(), &url)
            .header(reqwest::header::USER_AGENT, transport::user_agent())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.access_token);

        match method {
            Method::Get | Method::Delete => {
                if !params.is_empty() {
                    request = request.query(&transport::query_pairs(&params));
                }
            }
            Method::Post | Method::Put => {
                if !params.is_empty() {
                    request = request.json(&params);
                }
            }
        }

        let response = request.send().await.map_err(classify_transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_transport)?;
        tracing::debug!(status, "response received");

        if (200..300).contains(&status) {
            if body.trim().is_empty() {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_str(&body)?));
        }

        Err(match status {
            400 => Error::BadRequest { status, body },
            401 => Error::InvalidCredentials,
            403 => Error::Forbidden,
            404 => Error::NonExistentRecord,
            _ => Error::UnexpectedHttp { status, body },
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn classify_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err)
    } else {
        Error::Transport(err)
    }
}
