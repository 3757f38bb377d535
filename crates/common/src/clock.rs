//! Clock and frame-cadence utilities for export timing.
//!
//! A clip export is bounded by wall-clock elapsed time, not by how many
//! frames were composited. This module provides:
//! - An injectable `Clock` so the recording loop can be driven
//!   deterministically in tests
//! - A `RateController` that paces the per-frame draw loop to a target
//!   frame rate

use std::cell::Cell;
use std::time::Instant;

/// Source of elapsed seconds for playback and export timing.
pub trait Clock {
    /// Seconds elapsed since some fixed origin. Must be monotonic.
    fn now_secs(&self) -> f64;
}

/// A monotonic clock anchored to the instant it was started.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// A manually-advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time to an absolute value.
    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    /// Advance the current time by a delta.
    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Frame cadence controller for the export draw loop.
#[derive(Debug)]
pub struct RateController {
    target_interval_secs: f64,
    last_tick_secs: Option<f64>,
}

impl RateController {
    /// Create a controller targeting the given Hz rate.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_secs: 1.0 / target_hz.max(1) as f64,
            last_tick_secs: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, now_secs: f64) -> bool {
        match self.last_tick_secs {
            None => {
                self.last_tick_secs = Some(now_secs);
                true
            }
            Some(last) if now_secs >= last + self.target_interval_secs => {
                self.last_tick_secs = Some(now_secs);
                true
            }
            _ => false,
        }
    }

    /// Target interval between ticks, in seconds.
    pub fn interval_secs(&self) -> f64 {
        self.target_interval_secs
    }
}
