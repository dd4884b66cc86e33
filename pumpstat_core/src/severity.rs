//! Severity classification for the three pump status signals.
//!
//! Each signal has its own ordered table of `(upper bound, tier)` pairs,
//! evaluated top-down; the first bound the reading is `<=` wins, so boundary
//! values belong to the stricter tier. Falling off the table is `Normal`,
//! an absent reading is `Neutral`.

use chrono::TimeDelta;

/// Severity tier of a single status indicator.
///
/// Ordered ascending in danger, so `Critical` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Reading absent; indicator rendered without emphasis.
    Neutral,
    Normal,
    Warning,
    Critical,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let word = match self {
            Self::Neutral => "neutral",
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        };
        f.write_str(word)
    }
}

/// Reservoir volume thresholds in insulin units.
const RESERVOIR_BANDS: &[(f64, Severity)] =
    &[(10.0, Severity::Critical), (30.0, Severity::Warning)];

/// Battery charge thresholds in percent.
const BATTERY_BANDS: &[(i32, Severity)] = &[(10, Severity::Critical), (20, Severity::Warning)];

/// Walk an ordered band table; first closed upper bound that matches wins.
fn classify<T>(value: T, bands: &[(T, Severity)]) -> Severity
where
    T: PartialOrd + Copy,
{
    for &(bound, tier) in bands {
        if value <= bound {
            return tier;
        }
    }
    Severity::Normal
}

/// Tier for the remaining reservoir volume in units.
pub fn reservoir_severity(units: Option<f64>) -> Severity {
    match units {
        None => Severity::Neutral,
        Some(units) => classify(units, RESERVOIR_BANDS),
    }
}

/// Tier for the pump battery charge in percent.
pub fn battery_severity(percent: Option<i32>) -> Severity {
    match percent {
        None => Severity::Neutral,
        Some(percent) => classify(percent, BATTERY_BANDS),
    }
}

/// Tier for the time left until the active consumable expires.
///
/// Compares full `TimeDelta` precision, so 8h plus one second is still
/// `Warning`. Negative remainders (already expired) stay `Critical`.
pub fn expiry_severity(remaining: Option<TimeDelta>) -> Severity {
    match remaining {
        None => Severity::Neutral,
        Some(left) => classify(
            left,
            &[
                (TimeDelta::hours(8), Severity::Critical),
                (TimeDelta::hours(24), Severity::Warning),
            ],
        ),
    }
}
