//! Low-level HTTP client — `ExchangeRatesHttp`.
//!
//! One method per API endpoint, all funneled through a single `get` dispatch:
//! race the transport call against the caller's cancellation token, consume
//! the body, classify the status, decode. Internal to the SDK — the
//! high-level client wraps this.

use crate::domain::rates::wire::{HistoricalRates, LatestRates};
use crate::error::Error;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Status and headers of a received response, kept alongside the decoded
/// value (and inside error variants) so transport-level details stay
/// inspectable.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// A decoded response body together with its [`ResponseMeta`].
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

/// Low-level HTTP client for the exchange rates REST API.
#[derive(Debug, Clone)]
pub(crate) struct ExchangeRatesHttp {
    client: Client,
    base_url: Url,
}

impl ExchangeRatesHttp {
    pub(crate) fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub(crate) async fn get_latest(
        &self,
        cancel: &CancellationToken,
        base_currency: &str,
        symbols: &[&str],
    ) -> Result<ApiResponse<LatestRates>, Error> {
        let url = latest_url(&self.base_url, base_currency, symbols);
        self.get(cancel, &url).await
    }

    pub(crate) async fn get_history(
        &self,
        cancel: &CancellationToken,
        base_currency: &str,
        start_at: &str,
        end_at: &str,
        symbols: &[&str],
    ) -> Result<ApiResponse<HistoricalRates>, Error> {
        let url = history_url(&self.base_url, base_currency, start_at, end_at, symbols);
        self.get(cancel, &url).await
    }

    // ── Internal dispatch ────────────────────────────────────────────────

    async fn get<T>(&self, cancel: &CancellationToken, url: &str) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!(%url, "dispatching GET");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = self.client.get(url).send() => match result {
                Ok(response) => response,
                // Cancellation wins over whatever the transport reported.
                Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
                Err(e) => return Err(Error::Transport(e)),
            },
        };

        let meta = ResponseMeta {
            status: response.status(),
            headers: response.headers().clone(),
        };

        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = response.bytes() => match result {
                Ok(body) => body,
                Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
                Err(e) => return Err(Error::Transport(e)),
            },
        };

        if !meta.status.is_success() {
            tracing::debug!(status = %meta.status, "API returned an error response");
            return Err(classify_error(meta, &body));
        }

        match decode_body(&body) {
            Ok(data) => Ok(ApiResponse { data, meta }),
            Err(source) => Err(Error::Decode { meta, source }),
        }
    }
}

// ── URL building ─────────────────────────────────────────────────────────

fn latest_url(base_url: &Url, base_currency: &str, symbols: &[&str]) -> String {
    let mut url = format!(
        "{}/latest?base={}",
        base_url.as_str().trim_end_matches('/'),
        base_currency
    );
    push_symbols(&mut url, symbols);
    url
}

fn history_url(
    base_url: &Url,
    base_currency: &str,
    start_at: &str,
    end_at: &str,
    symbols: &[&str],
) -> String {
    let mut url = format!(
        "{}/history?base={}&start_at={}&end_at={}",
        base_url.as_str().trim_end_matches('/'),
        base_currency,
        start_at,
        end_at
    );
    push_symbols(&mut url, symbols);
    url
}

/// Appends `&symbols=<comma-joined>` in caller order. No parameter at all
/// when empty.
fn push_symbols(url: &mut String, symbols: &[&str]) {
    if !symbols.is_empty() {
        url.push_str("&symbols=");
        url.push_str(&symbols.join(","));
    }
}

// ── Response decoding ────────────────────────────────────────────────────

/// Structured error payload the API sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    exception: Option<String>,
}

/// An empty body with a success status decodes to the zero value.
fn decode_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

/// Maps a non-2xx response to [`Error::Api`] when the body parses as a
/// structured error with a non-empty message, [`Error::Server`] with the raw
/// body otherwise.
fn classify_error(meta: ResponseMeta, body: &[u8]) -> Error {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if !parsed.error.is_empty() {
            return Error::Api {
                meta,
                message: parsed.error,
                exception: parsed.exception.filter(|e| !e.is_empty()),
            };
        }
    }

    Error::Server {
        meta,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
