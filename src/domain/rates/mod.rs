//! Rates domain — currency codes and rate responses.

pub mod currency;
pub mod wire;

pub use currency::{Currency, UnknownCurrency};
pub use wire::{HistoricalRates, LatestRates, RateSet};
