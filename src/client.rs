//! High-level client — `ExchangeRatesClient`.
//!
//! Holds the validated endpoint root, the base currency, and the HTTP
//! transport. Query methods delegate to the HTTP layer in `http/client.rs`.

use crate::domain::rates::wire::{HistoricalRates, LatestRates};
use crate::error::Error;
use crate::http::{ApiResponse, ExchangeRatesHttp};
use crate::network::{DEFAULT_API_URL, DEFAULT_BASE_CURRENCY};

use tokio_util::sync::CancellationToken;
use url::Url;

/// Optional construction-time configuration.
///
/// `None` (or empty) fields fall back to the defaults in [`crate::network`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_url: Option<String>,
    pub base_currency: Option<String>,
}

/// Client for the exchange rates REST API.
///
/// Cheap to clone; clones share the underlying transport but carry
/// independent base currencies, which is the supported way to run concurrent
/// queries against different bases.
#[derive(Debug, Clone)]
pub struct ExchangeRatesClient {
    http: ExchangeRatesHttp,
    base_currency: String,
}

impl ExchangeRatesClient {
    pub fn builder() -> ExchangeRatesClientBuilder {
        ExchangeRatesClientBuilder::default()
    }

    /// Creates a client from an optional transport and at most one
    /// [`ClientOptions`] value.
    ///
    /// Passing no transport constructs a default one owned by this client.
    /// Passing more than one options value fails with
    /// [`Error::InvalidClientOptions`]; this mirrors the original variadic
    /// API and is kept for compatibility. Performs no network I/O.
    pub fn new(
        http_client: Option<reqwest::Client>,
        options: &[ClientOptions],
    ) -> Result<Self, Error> {
        let options = match options {
            [] => None,
            [options] => Some(options),
            _ => return Err(Error::InvalidClientOptions),
        };

        let api_url = options
            .and_then(|o| o.api_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let base_currency = options
            .and_then(|o| o.base_currency.as_deref())
            .filter(|currency| !currency.is_empty())
            .unwrap_or(DEFAULT_BASE_CURRENCY);

        let base_url = Url::parse(api_url)?;

        Ok(Self {
            http: ExchangeRatesHttp::new(http_client.unwrap_or_default(), base_url),
            base_currency: base_currency.to_string(),
        })
    }

    /// The base currency used by subsequent queries.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Replaces the base currency used by subsequent queries.
    ///
    /// Takes `&mut self`, so it cannot race in-flight queries on the same
    /// instance; clone the client for per-call bases.
    pub fn set_base_currency(&mut self, currency: impl Into<String>) {
        self.base_currency = currency.into();
    }

    /// Fetches the latest rates for the configured base currency.
    ///
    /// Non-empty `symbols` restricts the response to those codes, in the
    /// given order. Codes are passed through verbatim — unknown ones are the
    /// server's problem.
    pub async fn latest(
        &self,
        cancel: &CancellationToken,
        symbols: &[&str],
    ) -> Result<ApiResponse<LatestRates>, Error> {
        self.http
            .get_latest(cancel, &self.base_currency, symbols)
            .await
    }

    /// Fetches rates for the date range `start_at..=end_at` (`YYYY-MM-DD`).
    ///
    /// Both dates are passed through verbatim; malformed or inverted ranges
    /// surface as server errors.
    pub async fn history(
        &self,
        cancel: &CancellationToken,
        start_at: &str,
        end_at: &str,
        symbols: &[&str],
    ) -> Result<ApiResponse<HistoricalRates>, Error> {
        self.http
            .get_history(cancel, &self.base_currency, start_at, end_at, symbols)
            .await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ExchangeRatesClientBuilder {
    api_url: String,
    base_currency: String,
    http_client: Option<reqwest::Client>,
}

impl Default for ExchangeRatesClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            http_client: None,
        }
    }
}

impl ExchangeRatesClientBuilder {
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn base_currency(mut self, currency: &str) -> Self {
        self.base_currency = currency.to_string();
        self
    }

    /// Supplies a shared transport instead of letting the client build its
    /// own. The SDK never shuts the transport down.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<ExchangeRatesClient, Error> {
        let base_url = Url::parse(&self.api_url)?;
        Ok(ExchangeRatesClient {
            http: ExchangeRatesHttp::new(self.http_client.unwrap_or_default(), base_url),
            base_currency: self.base_currency,
        })
    }
}
