//! Wall-clock abstraction for injected "now" values.
//!
//! Derivation functions take the current instant as an argument; callers that
//! sit on a real timer (the CLI, a refresh loop) obtain it from a `Clock`
//! implementation so tests can substitute a deterministic source.

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
