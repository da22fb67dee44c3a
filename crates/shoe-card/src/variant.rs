//! Card variant resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::ReleaseRecency;
use crate::tokens::{self, Color};

/// Visual treatment of a card. Exactly one applies per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A sale price is present. Wins over `NewRelease`.
    OnSale,
    /// Released inside the recency window.
    NewRelease,
    Default,
}

/// Tag text and colors for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub text: &'static str,
    pub color: Color,
    pub background_color: Color,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Tag lookup table. `None` means no tag is shown.
    pub fn tag(&self) -> Option<TagSpec> {
        match self {
            Variant::OnSale => Some(TagSpec {
                text: "Sale",
                color: tokens::WHITE,
                background_color: tokens::PRIMARY,
            }),
            Variant::NewRelease => Some(TagSpec {
                text: "Just Released!",
                color: tokens::WHITE,
                background_color: tokens::SECONDARY,
            }),
            Variant::Default => None,
        }
    }

    /// Whether the primary price is struck through.
    pub fn strikes_price(&self) -> bool {
        matches!(self, Variant::OnSale)
    }

    /// Whether the secondary sale price line is shown.
    pub fn shows_sale_price(&self) -> bool {
        matches!(self, Variant::OnSale)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the card variant.
///
/// Any sale price, including zero or a negative amount, selects `OnSale`.
/// Otherwise the recency predicate decides between `NewRelease` and
/// `Default`.
pub fn resolve<R>(sale_price: Option<i64>, release_date: DateTime<Utc>, recency: &R) -> Variant
where
    R: ReleaseRecency + ?Sized,
{
    if sale_price.is_some() {
        Variant::OnSale
    } else if recency.is_recent_release(release_date) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ReleaseWindow;
    use chrono::{Duration, TimeZone};

    fn window() -> ReleaseWindow {
        ReleaseWindow::days(30).as_of(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        window().now() - Duration::days(days)
    }

    /// Predicate that ignores the date entirely.
    struct Always(bool);

    impl ReleaseRecency for Always {
        fn is_recent_release(&self, _released: DateTime<Utc>) -> bool {
            self.0
        }
    }

    #[test]
    fn test_sale_price_wins_regardless_of_date() {
        for days in [0, 5, 29, 31, 400, 800] {
            assert_eq!(resolve(Some(110), days_ago(days), &window()), Variant::OnSale);
        }
        assert_eq!(resolve(Some(1), days_ago(0), &Always(true)), Variant::OnSale);
        assert_eq!(resolve(Some(1), days_ago(0), &Always(false)), Variant::OnSale);
    }

    #[test]
    fn test_zero_and_negative_sale_price_count_as_present() {
        assert_eq!(resolve(Some(0), days_ago(730), &window()), Variant::OnSale);
        assert_eq!(resolve(Some(-500), days_ago(730), &window()), Variant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale() {
        assert_eq!(resolve(None, days_ago(5), &window()), Variant::NewRelease);
        assert_eq!(resolve(None, days_ago(0), &Always(true)), Variant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        assert_eq!(resolve(None, days_ago(730), &window()), Variant::Default);
        assert_eq!(resolve(None, days_ago(0), &Always(false)), Variant::Default);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve(None, days_ago(12), &window());
        for _ in 0..5 {
            assert_eq!(resolve(None, days_ago(12), &window()), first);
        }
    }

    #[test]
    fn test_tag_table() {
        let sale = Variant::OnSale.tag().unwrap();
        assert_eq!(sale.text, "Sale");
        assert_eq!(sale.background_color, tokens::PRIMARY);
        assert_eq!(sale.color, tokens::WHITE);

        let new = Variant::NewRelease.tag().unwrap();
        assert_eq!(new.text, "Just Released!");
        assert_eq!(new.background_color, tokens::SECONDARY);
        assert_eq!(new.color, tokens::WHITE);

        assert!(Variant::Default.tag().is_none());
    }

    #[test]
    fn test_price_decoration_flags() {
        assert!(Variant::OnSale.strikes_price());
        assert!(Variant::OnSale.shows_sale_price());
        assert!(!Variant::NewRelease.strikes_price());
        assert!(!Variant::NewRelease.shows_sale_price());
        assert!(!Variant::Default.strikes_price());
        assert!(!Variant::Default.shows_sale_price());
    }

    #[test]
    fn test_variant_serde_names() {
        assert_eq!(serde_json::to_string(&Variant::OnSale).unwrap(), "\"on-sale\"");
        assert_eq!(
            serde_json::from_str::<Variant>("\"new-release\"").unwrap(),
            Variant::NewRelease
        );
        assert_eq!(Variant::Default.to_string(), "default");
    }
}
