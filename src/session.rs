//! Session configuration and countdown timer
//!
//! A packing session runs against a fixed capacity and a countdown. The
//! timer is the only recurring scheduled operation in the program; its
//! expiry transition must fire exactly once so the time-up overlay and
//! input lockout are triggered a single time even though the event loop
//! keeps polling every frame.

use std::time::{Duration, Instant};

/// Fixed per-session configuration
///
/// Set once at startup and never mutated. Defaults: 100 kg, 100 cubic
/// meters, 150 seconds.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub max_weight: f32,
    pub max_volume: f32,
    pub countdown_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_weight: 100.0,
            max_volume: 100.0,
            countdown_secs: 150,
        }
    }
}

/// Wall-clock countdown for the session
///
/// Driven by `update()` once per frame from the event loop. Time accounting
/// is split from clock reads (`advance`) so tests can step the timer
/// without sleeping.
#[derive(Debug)]
pub struct CountdownTimer {
    total: Duration,
    elapsed: Duration,
    last_update: Option<Instant>,
    expiry_fired: bool,
}

impl CountdownTimer {
    /// Creates a timer that counts down from `secs` seconds
    pub fn new(secs: u32) -> Self {
        CountdownTimer {
            total: Duration::from_secs(secs as u64),
            elapsed: Duration::ZERO,
            last_update: None,
            expiry_fired: false,
        }
    }

    /// Advances the timer by real elapsed time since the previous call
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = match self.last_update {
            Some(previous) => now.duration_since(previous),
            None => Duration::ZERO,
        };
        self.last_update = Some(now);
        self.advance(delta);
    }

    /// Advances the timer by an explicit delta
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.total);
    }

    /// Whole seconds left on the clock (rounded up, 0 once expired)
    pub fn remaining_secs(&self) -> u32 {
        (self.total - self.elapsed).as_secs_f64().ceil() as u32
    }

    /// Returns true once the countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Consumes the expiry transition
    ///
    /// Returns true on the first call after the countdown reaches zero and
    /// false forever after, so the terminal transition runs exactly once.
    pub fn take_expiry(&mut self) -> bool {
        if self.is_expired() && !self.expiry_fired {
            self.expiry_fired = true;
            true
        } else {
            false
        }
    }
}
