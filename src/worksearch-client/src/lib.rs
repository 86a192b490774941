//! Worksearch Client Library
//!
//! HTTP client for the Worksearch REST API: content sources, documents
//! and document-level permissions. One `Client` wraps one immutable
//! configuration; every API method maps onto a single authenticated
//! request/response cycle.

mod client;
mod config;
mod documents;
mod permissions;
mod sources;
mod transport;

pub use client::{Client, Page};
pub use config::Config;
pub use transport::{Method, Params, CLIENT_NAME};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server returned 401. The access token was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The server returned 403.
    #[error("forbidden")]
    Forbidden,

    /// The server returned 404.
    #[error("record does not exist")]
    NonExistentRecord,

    /// The server returned 400. Carries the status code and raw body.
    #[error("{status} {body}")]
    BadRequest { status: u16, body: String },

    /// Any other non-2xx status. Carries the status code and raw body.
    #[error("{status} {body}")]
    UnexpectedHttp { status: u16, body: String },

    /// The overall timeout elapsed before the response arrived. Kept
    /// separate from the HTTP status taxonomy.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Transport failure other than a timeout (DNS, connect, TLS).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The CA bundle named in `Config::ca_bundle` could not be read.
    #[error("could not read CA bundle at {}: {source}", path.display())]
    CaBundle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The endpoint or proxy URL was rejected while building the client.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;
