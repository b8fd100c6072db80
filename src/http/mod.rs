//! HTTP layer — request dispatch, response classification, decoding.

pub mod client;

pub use client::{ApiResponse, ResponseMeta};

pub(crate) use client::ExchangeRatesHttp;
