//! # exchangerates-sdk
//!
//! A Rust client SDK for the [exchangeratesapi.io](https://exchangeratesapi.io)
//! currency exchange rate API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, wire structs, errors (no I/O)
//! 2. **HTTP API** — `ExchangeRatesHttp`: request building, dispatch,
//!    response classification and decoding
//! 3. **High-Level Client** — `ExchangeRatesClient` with builder-based
//!    configuration and the `latest` / `history` queries
//!
//! Every query threads a `CancellationToken` through to the transport call,
//! so callers can distinguish "the network failed" from "I gave up".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exchangerates_sdk::prelude::*;
//!
//! let client = ExchangeRatesClient::builder()
//!     .base_currency("EUR")
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! let latest = client.latest(&cancel, &["JPY", "GBP"]).await?;
//! println!("{} JPY per EUR on {}", latest.data.rates.jpy, latest.data.date);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): currency set, wire types.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and currency constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP layer: dispatch, classification, decoding.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ExchangeRatesClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::rates::{
        Currency, HistoricalRates, LatestRates, RateSet, UnknownCurrency,
    };

    // Errors
    pub use crate::error::Error;

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_BASE_CURRENCY};

    // Client + response envelope
    pub use crate::client::{ClientOptions, ExchangeRatesClient, ExchangeRatesClientBuilder};
    pub use crate::http::{ApiResponse, ResponseMeta};

    // Cancellation context threaded through every query.
    pub use tokio_util::sync::CancellationToken;
}
