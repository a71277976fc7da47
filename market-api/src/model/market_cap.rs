//! Market capitalization of an instrument.
//!
//! The value and its unit are kept apart; the textual form ("N/A", "1234 Cr",
//! "2.5T") is produced only by the `Display` implementation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const CRORE: f64 = 1e7;

/// Magnitude bucket used when formatting a stock's market cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapUnit {
    Trillion,
    Billion,
    LakhCrore,
    Million,
}

impl CapUnit {
    /// The divisor that turns a raw magnitude into this unit.
    pub fn divisor(&self) -> f64 {
        match self {
            CapUnit::Trillion => 1e12,
            CapUnit::Billion => 1e9,
            CapUnit::LakhCrore => 1e7,
            CapUnit::Million => 1e6,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            CapUnit::Trillion => "T",
            CapUnit::Billion => "B",
            CapUnit::LakhCrore => "L Cr",
            CapUnit::Million => "M",
        }
    }

    /// Picks the bucket for a raw magnitude.
    ///
    /// The thresholds are checked from the largest down; anything below 10^7
    /// falls into millions.
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= 1e12 {
            CapUnit::Trillion
        } else if magnitude >= 1e9 {
            CapUnit::Billion
        } else if magnitude >= 1e7 {
            CapUnit::LakhCrore
        } else {
            CapUnit::Million
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum MarketCap {
    /// Gold products carry no market cap.
    NotApplicable,
    /// Fund assets under management, in crore.
    Crore(f64),
    /// A stock's market cap, already divided into `unit`.
    Bucketed { value: f64, unit: CapUnit },
}

impl MarketCap {
    /// Buckets a raw stock market cap (price times share count).
    pub fn from_magnitude(magnitude: f64) -> Self {
        let unit = CapUnit::for_magnitude(magnitude);
        MarketCap::Bucketed {
            value: magnitude / unit.divisor(),
            unit,
        }
    }

    /// Raw magnitude, or `None` when not applicable.
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            MarketCap::NotApplicable => None,
            MarketCap::Crore(value) => Some(value * CRORE),
            MarketCap::Bucketed { value, unit } => Some(value * unit.divisor()),
        }
    }

    /// Orders by magnitude; `NotApplicable` sorts before every value.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.magnitude(), other.magnitude()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.total_cmp(&b),
        }
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketCap::NotApplicable => f.write_str("N/A"),
            MarketCap::Crore(value) => write!(f, "{:.0} Cr", value),
            MarketCap::Bucketed { value, unit } => write!(f, "{:.1}{}", value, unit.suffix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(CapUnit::for_magnitude(2.5e12), CapUnit::Trillion);
        assert_eq!(CapUnit::for_magnitude(1e12), CapUnit::Trillion);
        assert_eq!(CapUnit::for_magnitude(999.9e9), CapUnit::Billion);
        assert_eq!(CapUnit::for_magnitude(1e9), CapUnit::Billion);
        assert_eq!(CapUnit::for_magnitude(5e8), CapUnit::LakhCrore);
        assert_eq!(CapUnit::for_magnitude(1e7), CapUnit::LakhCrore);
        assert_eq!(CapUnit::for_magnitude(9_999_999.0), CapUnit::Million);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(MarketCap::NotApplicable.to_string(), "N/A");
        assert_eq!(MarketCap::Crore(12_345.4).to_string(), "12345 Cr");
        assert_eq!(MarketCap::from_magnitude(2.53e12).to_string(), "2.5T");
        assert_eq!(MarketCap::from_magnitude(45.67e9).to_string(), "45.7B");
        assert_eq!(MarketCap::from_magnitude(3.21e8).to_string(), "32.1L Cr");
        assert_eq!(MarketCap::from_magnitude(4.2e6).to_string(), "4.2M");
    }

    #[test]
    fn test_magnitude_round_trips_bucket() {
        let cap = MarketCap::from_magnitude(7.5e10);
        let magnitude = cap.magnitude().unwrap();
        assert!((magnitude - 7.5e10).abs() < 1.0);
    }

    #[test]
    fn test_not_applicable_sorts_first() {
        let na = MarketCap::NotApplicable;
        let small = MarketCap::from_magnitude(1e6);
        let fund = MarketCap::Crore(1_000.0);
        assert_eq!(na.cmp_magnitude(&small), Ordering::Less);
        assert_eq!(small.cmp_magnitude(&fund), Ordering::Less);
        assert_eq!(fund.cmp_magnitude(&fund), Ordering::Equal);
    }
}
