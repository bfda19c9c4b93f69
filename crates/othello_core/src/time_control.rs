//! Time control and search limits for Othello engines.
//!
//! Search is single-threaded and the deadline is only consulted between
//! iterative-deepening depths, so the controller is a plain clock rather than
//! a shared stop flag.

use std::time::{Duration, Instant};

/// Search limits that control when an engine should stop deepening.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub max_depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Clock for the current search
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            max_depth: depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            max_depth: depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only time constraint (unbounded depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            max_depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }

    /// True once the move time has been used up.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_control.is_expired()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Wall-clock budget for one search.
#[derive(Debug, Clone, Default)]
pub struct TimeControl {
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
    /// Start time of the search
    start_time: Option<Instant>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            time_limit,
            start_time: None,
        }
    }

    /// Start (or restart) the clock.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Elapsed time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// True when a limit is set and strictly exceeded.
    pub fn is_expired(&self) -> bool {
        match self.time_limit {
            Some(limit) => self.elapsed() > limit,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
