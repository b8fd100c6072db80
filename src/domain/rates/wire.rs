//! Wire types for rate responses (REST).

use super::currency::Currency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One exchange rate per supported currency, relative to the query's base.
///
/// The field set is fixed at compile time. Codes the server returns that are
/// not in the set are dropped during decoding; codes the server omits decode
/// as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct RateSet {
    pub aud: f64,
    pub bgn: f64,
    pub brl: f64,
    pub cad: f64,
    pub chf: f64,
    pub cny: f64,
    pub czk: f64,
    pub dkk: f64,
    pub gbp: f64,
    pub hkd: f64,
    pub hrk: f64,
    pub huf: f64,
    pub idr: f64,
    pub ils: f64,
    pub inr: f64,
    pub isk: f64,
    pub jpy: f64,
    pub krw: f64,
    pub mxn: f64,
    pub myr: f64,
    pub nok: f64,
    pub nzd: f64,
    pub php: f64,
    pub pln: f64,
    pub ron: f64,
    pub rub: f64,
    pub sek: f64,
    pub sgd: f64,
    pub thb: f64,
    pub r#try: f64,
    pub usd: f64,
    pub zar: f64,
}

impl RateSet {
    pub fn get(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Aud => self.aud,
            Currency::Bgn => self.bgn,
            Currency::Brl => self.brl,
            Currency::Cad => self.cad,
            Currency::Chf => self.chf,
            Currency::Cny => self.cny,
            Currency::Czk => self.czk,
            Currency::Dkk => self.dkk,
            Currency::Gbp => self.gbp,
            Currency::Hkd => self.hkd,
            Currency::Hrk => self.hrk,
            Currency::Huf => self.huf,
            Currency::Idr => self.idr,
            Currency::Ils => self.ils,
            Currency::Inr => self.inr,
            Currency::Isk => self.isk,
            Currency::Jpy => self.jpy,
            Currency::Krw => self.krw,
            Currency::Mxn => self.mxn,
            Currency::Myr => self.myr,
            Currency::Nok => self.nok,
            Currency::Nzd => self.nzd,
            Currency::Php => self.php,
            Currency::Pln => self.pln,
            Currency::Ron => self.ron,
            Currency::Rub => self.rub,
            Currency::Sek => self.sek,
            Currency::Sgd => self.sgd,
            Currency::Thb => self.thb,
            Currency::Try => self.r#try,
            Currency::Usd => self.usd,
            Currency::Zar => self.zar,
        }
    }

    /// Iterate over every `(currency, rate)` pair, in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// REST response for the `latest` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestRates {
    pub rates: RateSet,
    pub base: String,
    /// Quote date, `YYYY-MM-DD`.
    pub date: String,
}

/// REST response for the `history` endpoint.
///
/// `rates` is keyed by quote date (`YYYY-MM-DD`); a `BTreeMap` keeps
/// iteration in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalRates {
    pub rates: BTreeMap<String, RateSet>,
    pub base: String,
    pub start_at: String,
    pub end_at: String,
}
