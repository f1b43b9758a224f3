//! Time-based logging gate
//!
//! A [`RateGate`] is ticked by its owner (once per frame, per loop iteration,
//! ...) and switches a [`LevelLogger`] fully on or fully off depending on how
//! long ago the gate last opened. Ticks arriving faster than the configured
//! frequency leave logging off until enough time has passed.

use super::error::{LoggerError, Result};
use super::level_logger::LevelLogger;
use std::time::{Duration, Instant};

/// Whether the last tick left logging enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Logging enabled
    Armed,
    /// Logging disabled until a later tick qualifies
    Throttled,
}

#[derive(Debug, Clone)]
pub struct RateGate {
    min_interval: Duration,
    last_armed: Instant,
    state: GateState,
}

impl RateGate {
    /// Gate opening at most `max_frequency_hz` times per second.
    ///
    /// The reference point is the moment of construction, so a tick arriving
    /// less than one interval later throttles.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless the frequency is finite, positive
    /// and large enough for its interval to fit in a [`Duration`].
    pub fn new(max_frequency_hz: f64) -> Result<Self> {
        Self::starting_at(max_frequency_hz, Instant::now())
    }

    /// Like [`new`](Self::new) with an explicit reference point
    pub fn starting_at(max_frequency_hz: f64, start: Instant) -> Result<Self> {
        if !max_frequency_hz.is_finite() || max_frequency_hz <= 0.0 {
            return Err(LoggerError::config(
                "RateGate",
                format!("max frequency must be finite and positive, got {}", max_frequency_hz),
            ));
        }
        let min_interval = Duration::try_from_secs_f64(1.0 / max_frequency_hz).map_err(|e| {
            LoggerError::config(
                "RateGate",
                format!("max frequency {} gives an unusable interval: {}", max_frequency_hz, e),
            )
        })?;
        Ok(Self {
            min_interval,
            last_armed: start,
            state: GateState::Armed,
        })
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == GateState::Armed
    }

    /// Compute the transition for a tick at `now` without touching any logger.
    pub fn advance(&mut self, now: Instant) -> GateState {
        let elapsed = now.saturating_duration_since(self.last_armed);
        if elapsed >= self.min_interval {
            self.state = GateState::Armed;
            self.last_armed = now;
        } else {
            self.state = GateState::Throttled;
        }
        self.state
    }

    /// Tick now and switch `logger` on or off accordingly
    pub fn tick<L: LevelLogger + ?Sized>(&mut self, logger: &mut L) -> GateState {
        self.tick_at(Instant::now(), logger)
    }

    pub fn tick_at<L: LevelLogger + ?Sized>(&mut self, now: Instant, logger: &mut L) -> GateState {
        match self.advance(now) {
            GateState::Armed => logger.enable_all_levels(),
            GateState::Throttled => logger.disable_all_levels(),
        }
        self.state
    }
}
