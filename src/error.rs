//! Unified SDK error types.

use crate::http::ResponseMeta;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum Error {
    /// More than one `ClientOptions` value was passed to
    /// [`ExchangeRatesClient::new`](crate::client::ExchangeRatesClient::new).
    #[error("invalid client options")]
    InvalidClientOptions,

    /// The configured API URL does not parse as an absolute URL.
    #[error("invalid api url: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// The transport failed before a response was received (connect, DNS,
    /// TLS, timeout). Surfaced verbatim.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired while the call was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// The server returned a structured error payload.
    #[error("{}", api_message(.message, .exception))]
    Api {
        meta: ResponseMeta,
        message: String,
        /// Optional exception detail reported by the server.
        exception: Option<String>,
    },

    /// The server returned a non-2xx response whose body is not a structured
    /// error. The raw body text is preserved verbatim.
    #[error("{body}")]
    Server { meta: ResponseMeta, body: String },

    /// A 2xx response body did not match the expected shape.
    #[error("decoding response body: {source}")]
    Decode {
        meta: ResponseMeta,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Response metadata, when a response was received before failing.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            Error::Api { meta, .. } | Error::Server { meta, .. } | Error::Decode { meta, .. } => {
                Some(meta)
            }
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.meta().map(|m| m.status)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

fn api_message(message: &str, exception: &Option<String>) -> String {
    match exception {
        Some(exception) => format!("{message}, {exception}"),
        None => message.to_string(),
    }
}
