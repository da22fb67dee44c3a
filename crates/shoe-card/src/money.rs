//! Money type for representing card prices.
//!
//! Amounts are kept in the currency's smallest unit (cents for USD) so price
//! strings never pick up floating-point noise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// True when the amount has no fractional part (e.g. `$165.00`).
    pub fn is_whole(&self) -> bool {
        self.amount_minor % self.currency.minor_per_major() == 0
    }

    /// Format without the fractional part when it is zero (e.g., "$165").
    pub fn display_compact(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let per_major = self.currency.minor_per_major() as u64;
        let magnitude = self.amount_minor.unsigned_abs();
        let major = magnitude / per_major;
        let minor = magnitude % per_major;
        let symbol = self.currency.symbol();

        if self.is_whole() {
            format!("{sign}{symbol}{major}")
        } else {
            let places = self.currency.decimal_places() as usize;
            format!("{sign}{symbol}{major}.{minor:0places$}")
        }
    }
}
