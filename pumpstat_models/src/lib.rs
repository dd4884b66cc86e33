#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Data schemas for the pump status stack.
//!
//! - `TempTarget` is the stored temporary glucose-target record. Storage uses
//!   an explicit field-name remapping (`_id`, `created_at`, camelCase for the
//!   rest); records round-trip verbatim and are validated only on
//!   construction or on demand.
//! - `PumpTelemetry` is the raw snapshot handed over by the pump driver,
//!   consumed by `pumpstat_core` to derive display indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TargetError {
    #[error("target range inverted: top {top} is below bottom {bottom}")]
    InvertedRange { top: f64, bottom: f64 },
    #[error("target bounds must be positive, got top {top} and bottom {bottom}")]
    NonPositiveBounds { top: f64, bottom: f64 },
    #[error("duration must be >= 0 minutes, got {0}")]
    NegativeDuration(f64),
}

/// A time-boxed override of the normal glucose target range.
///
/// Immutable after construction; cancellation or replacement creates a new
/// record. Identity is the generated `id`, so two records with identical
/// field values but different ids compare unequal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempTarget {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Upper bound of the override range (mg/dL). Must be >= `target_bottom`.
    pub target_top: f64,
    /// Lower bound of the override range (mg/dL).
    pub target_bottom: f64,
    /// Override duration in minutes.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entered_by: Option<String>,
}

impl TempTarget {
    /// Sentinel `entered_by`/name value for targets set directly on the device.
    pub const MANUAL: &'static str = "pumpstat://manual";
    /// Name label for a user-defined one-off target.
    pub const CUSTOM: &'static str = "Custom";
    /// Name label signalling a targetless (cancel) state rather than a stored range.
    pub const CANCEL: &'static str = "Cancel";

    /// Build a validated record with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        target_top: f64,
        target_bottom: f64,
        duration: f64,
        entered_by: Option<String>,
    ) -> Result<Self, TargetError> {
        let target = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at,
            target_top,
            target_bottom,
            duration,
            entered_by,
        };
        target.validate()?;
        Ok(target)
    }

    /// Re-check the range and duration invariants, e.g. on records decoded
    /// from storage. Decoding itself never validates or mutates.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.target_top <= 0.0 || self.target_bottom <= 0.0 {
            return Err(TargetError::NonPositiveBounds {
                top: self.target_top,
                bottom: self.target_bottom,
            });
        }
        if self.target_top < self.target_bottom {
            return Err(TargetError::InvertedRange {
                top: self.target_top,
                bottom: self.target_bottom,
            });
        }
        if self.duration < 0.0 {
            return Err(TargetError::NegativeDuration(self.duration));
        }
        Ok(())
    }

    /// True for the reserved record that clears the active override.
    pub fn is_cancel(&self) -> bool {
        self.name == Self::CANCEL
    }
}

/// Battery reading as reported by the pump driver. `display` tells whether
/// the pump considers the value worth showing at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryReading {
    pub percent: Option<i32>,
    pub display: Option<bool>,
}

/// Raw status snapshot handed over by the pump driver.
///
/// Every reading is optional; a pump model that does not report a signal
/// simply leaves it absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PumpTelemetry {
    /// Display name of the connected pump.
    #[serde(default)]
    pub name: String,
    /// Remaining reservoir volume in insulin units.
    pub reservoir_units: Option<f64>,
    pub battery: Option<BatteryReading>,
    /// When the active consumable (cannula/reservoir) must be replaced.
    pub expires_at: Option<DateTime<Utc>>,
}

pub fn target_from_json(s: &str) -> Result<TempTarget, serde_json::Error> {
    serde_json::from_str::<TempTarget>(s)
}

pub fn target_to_json(target: &TempTarget) -> Result<String, serde_json::Error> {
    serde_json::to_string(target)
}

pub fn telemetry_from_json(s: &str) -> Result<PumpTelemetry, serde_json::Error> {
    serde_json::from_str::<PumpTelemetry>(s)
}

pub fn telemetry_to_json(telemetry: &PumpTelemetry) -> Result<String, serde_json::Error> {
    serde_json::to_string(telemetry)
}
