use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the locale-change calls.
///
/// Both variants come straight from the HTTP transport. Nothing is retried
/// or translated before it reaches the caller; recovery and user-facing
/// formatting belong to the host application.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered with a non-2xx status.
    #[error("{url} rejected the request with status {status}")]
    RemoteRejection { url: String, status: StatusCode },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
