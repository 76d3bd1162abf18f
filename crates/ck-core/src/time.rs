//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: an instant is an `f64` number of time units since the
//! first customer arrived.  `f64` is only `PartialOrd`, which is not enough
//! for a priority queue, so [`SimTime`] wraps it and orders with
//! [`f64::total_cmp`].  Instants are built from sums of finite, non-negative
//! draws, so the total order agrees with the numeric one everywhere it
//! matters.

use std::cmp::Ordering;
use std::fmt;

/// An absolute simulation instant.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap a raw instant.
    ///
    /// # Panics
    /// Panics in debug mode if `t` is NaN.
    #[inline]
    pub fn new(t: f64) -> SimTime {
        debug_assert!(!t.is_nan(), "SimTime must not be NaN");
        SimTime(t)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime::new(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl From<f64> for SimTime {
    fn from(t: f64) -> SimTime {
        SimTime::new(t)
    }
}

/// Three decimal places, the precision used throughout the event log.
impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
