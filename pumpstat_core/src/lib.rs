#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Pump status derivation (presentation-agnostic).
//!
//! This crate turns a raw pump telemetry snapshot (reservoir volume, battery
//! percentage, consumable expiry) into user-facing indicators: compact
//! remaining-time strings and three-way severity tiers the presentation
//! layer maps to colors or icons.
//!
//! ## Architecture
//!
//! - **Severity**: ordered threshold tables, one per signal (`severity` module)
//! - **Remaining time**: greedy day/hour/minute decomposition (`remaining` module)
//! - **Glance**: snapshot + instant -> per-signal indicators (`glance` module)
//! - **Clock**: injected wall-clock source (`clock` module)
//!
//! All derivation functions are pure and total: the current time is an
//! argument, absent readings map to a neutral tier, and malformed readings
//! pass through the same threshold tables as any other value.

pub mod clock;
pub mod glance;
pub mod remaining;
pub mod severity;

pub use clock::{Clock, SystemClock};
pub use glance::{Indicator, PumpGlance, build_glance};
pub use remaining::remaining_time_string;
pub use severity::{Severity, battery_severity, expiry_severity, reservoir_severity};
