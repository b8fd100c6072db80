//! The closed set of currency codes carried by rate responses.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An ISO 4217 currency code supported by the API.
///
/// The set is closed: it matches the codes the reference data source
/// publishes rates for. Codes outside this set can still be *requested* (the
/// `symbols` parameter is free-form), but they never appear in a decoded
/// [`RateSet`](super::RateSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aud,
    Bgn,
    Brl,
    Cad,
    Chf,
    Cny,
    Czk,
    Dkk,
    Gbp,
    Hkd,
    Hrk,
    Huf,
    Idr,
    Ils,
    Inr,
    Isk,
    Jpy,
    Krw,
    Mxn,
    Myr,
    Nok,
    Nzd,
    Php,
    Pln,
    Ron,
    Rub,
    Sek,
    Sgd,
    Thb,
    Try,
    Usd,
    Zar,
}

/// A currency code outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    /// Every supported currency, in code order.
    pub const ALL: [Currency; 32] = [
        Currency::Aud,
        Currency::Bgn,
        Currency::Brl,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Czk,
        Currency::Dkk,
        Currency::Gbp,
        Currency::Hkd,
        Currency::Hrk,
        Currency::Huf,
        Currency::Idr,
        Currency::Ils,
        Currency::Inr,
        Currency::Isk,
        Currency::Jpy,
        Currency::Krw,
        Currency::Mxn,
        Currency::Myr,
        Currency::Nok,
        Currency::Nzd,
        Currency::Php,
        Currency::Pln,
        Currency::Ron,
        Currency::Rub,
        Currency::Sek,
        Currency::Sgd,
        Currency::Thb,
        Currency::Try,
        Currency::Usd,
        Currency::Zar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Bgn => "BGN",
            Currency::Brl => "BRL",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Czk => "CZK",
            Currency::Dkk => "DKK",
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
            Currency::Hrk => "HRK",
            Currency::Huf => "HUF",
            Currency::Idr => "IDR",
            Currency::Ils => "ILS",
            Currency::Inr => "INR",
            Currency::Isk => "ISK",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Mxn => "MXN",
            Currency::Myr => "MYR",
            Currency::Nok => "NOK",
            Currency::Nzd => "NZD",
            Currency::Php => "PHP",
            Currency::Pln => "PLN",
            Currency::Ron => "RON",
            Currency::Rub => "RUB",
            Currency::Sek => "SEK",
            Currency::Sgd => "SGD",
            Currency::Thb => "THB",
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Zar => "ZAR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
