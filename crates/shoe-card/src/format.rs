//! Formatting collaborators used by the card renderer.
//!
//! The renderer only sees these traits. The default implementations cover
//! the storefront's needs; hosts with their own locale or pricing rules plug
//! in different ones.

use chrono::{DateTime, Duration, Utc};

use crate::money::{Currency, Money};

/// Renders a minor-unit amount as a currency string.
pub trait PriceFormatter {
    fn format_price(&self, amount: i64) -> String;
}

/// Renders `(label, count)` as a noun phrase ("1 Color", "2 Colors").
pub trait Pluralizer {
    fn pluralize(&self, label: &str, count: u32) -> String;
}

/// Decides whether a release date still counts as new.
pub trait ReleaseRecency {
    fn is_recent_release(&self, released: DateTime<Utc>) -> bool;
}

/// Formats prices through [`Money`] in a fixed currency.
///
/// Whole amounts drop the fractional part, so `16500` cents reads `$165`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format_price(&self, amount: i64) -> String {
        Money::new(amount, self.currency).display_compact()
    }
}

/// Appends an `s` for every count except one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishPluralizer;

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, label: &str, count: u32) -> String {
        let suffix = if count == 1 { "" } else { "s" };
        format!("{count} {label}{suffix}")
    }
}

/// Default recency window length, in days.
pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// A release is recent while `now - released < window`.
///
/// `now` is captured once at construction so every card in a render pass
/// is judged against the same instant. Release dates in the future are
/// recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    window: Duration,
    now: DateTime<Utc>,
}

impl ReleaseWindow {
    /// Window of `days` days, measured from the current time.
    pub fn days(days: u32) -> Self {
        Self {
            window: Duration::days(i64::from(days)),
            now: Utc::now(),
        }
    }

    /// Pin the reference time.
    pub fn as_of(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

impl Default for ReleaseWindow {
    fn default() -> Self {
        Self::days(DEFAULT_RECENCY_DAYS)
    }
}

impl ReleaseRecency for ReleaseWindow {
    fn is_recent_release(&self, released: DateTime<Utc>) -> bool {
        self.now.signed_duration_since(released) < self.window
    }
}
