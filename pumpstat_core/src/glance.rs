//! Glance assembly: one telemetry snapshot plus an instant in, one set of
//! display-ready indicators out.

use chrono::{DateTime, Utc};

pub use pumpstat_models::{BatteryReading, PumpTelemetry};

use crate::remaining::remaining_time_string;
use crate::severity::{Severity, battery_severity, expiry_severity, reservoir_severity};

/// A single rendered status row: formatted value plus severity tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub text: String,
    pub severity: Severity,
}

/// Display-ready pump status. Absent signals produce no indicator at all;
/// which rows exist already encodes the display rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PumpGlance {
    pub name: String,
    pub reservoir: Option<Indicator>,
    pub battery: Option<Indicator>,
    pub expiry: Option<Indicator>,
}

/// Reservoir volume with at most one fraction digit, e.g. `"12.3 U"`.
/// Whole values drop the fraction digit: `"12 U"`.
fn reservoir_text(units: f64) -> String {
    let rounded = (units * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0} U")
    } else {
        format!("{rounded:.1} U")
    }
}

/// Battery charge text. An unreported percentage displays as full.
fn battery_text(percent: Option<i32>) -> String {
    format!("{} %", percent.unwrap_or(100))
}

/// Derive the glance for `telemetry` as seen at `now`.
///
/// Row rules:
/// - reservoir: present whenever a volume reading is present
/// - battery: present only when the reading is present, its display flag is
///   set, and no expiry countdown is active (an absent flag counts as unset)
/// - expiry: present whenever an expiry timestamp is tracked; remaining time
///   is `expires_at - now` and keeps its sign once expired
pub fn build_glance(telemetry: &PumpTelemetry, now: DateTime<Utc>) -> PumpGlance {
    let reservoir = telemetry.reservoir_units.map(|units| Indicator {
        text: reservoir_text(units),
        severity: reservoir_severity(Some(units)),
    });

    let battery = telemetry
        .battery
        .filter(|b| b.display.unwrap_or(false) && telemetry.expires_at.is_none())
        .map(|b| Indicator {
            text: battery_text(b.percent),
            severity: battery_severity(b.percent),
        });

    let expiry = telemetry.expires_at.map(|expires_at| {
        let left = expires_at.signed_duration_since(now);
        Indicator {
            text: remaining_time_string(left),
            severity: expiry_severity(Some(left)),
        }
    });

    tracing::debug!(
        pump = %telemetry.name,
        reservoir = ?reservoir.as_ref().map(|i| i.severity),
        battery = ?battery.as_ref().map(|i| i.severity),
        expiry = ?expiry.as_ref().map(|i| i.severity),
        "glance derived"
    );

    PumpGlance {
        name: telemetry.name.clone(),
        reservoir,
        battery,
        expiry,
    }
}
