//! Random sources driving customer generation, service and rest.
//!
//! # Determinism strategy
//!
//! [`SimRandom`] keeps one independent `SmallRng` per kind of draw, seeded
//! by:
//!
//!   seed = global_seed XOR (stream_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio.
//! Because every kind of draw has its own stream, the sequence of service
//! times does not depend on how many rest trials happened before it, only on
//! how many service times were drawn.  The engine still calls each stream in
//! a fixed order, so a given seed always reproduces the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::{CheckoutConfig, CkError, CkResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The five draws the simulation needs.
///
/// Durations are strictly positive; trials are uniform on `[0, 1)` and are
/// compared against a configured probability with `<`.
pub trait RandomSource {
    /// Gap between consecutive customer arrivals.
    fn inter_arrival_time(&mut self) -> f64;

    /// How long one service takes.
    fn service_time(&mut self) -> f64;

    /// How long a human server rests once it decides to.
    fn rest_period(&mut self) -> f64;

    /// Uniform draw deciding whether a human server rests after a service.
    fn rest_trial(&mut self) -> f64;

    /// Uniform draw deciding whether a new customer is greedy.
    fn customer_type_trial(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn inter_arrival_time(&mut self) -> f64 {
        (**self).inter_arrival_time()
    }
    fn service_time(&mut self) -> f64 {
        (**self).service_time()
    }
    fn rest_period(&mut self) -> f64 {
        (**self).rest_period()
    }
    fn rest_trial(&mut self) -> f64 {
        (**self).rest_trial()
    }
    fn customer_type_trial(&mut self) -> f64 {
        (**self).customer_type_trial()
    }
}

/// Names one of the five draw streams.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Stream {
    InterArrival,
    Service,
    RestPeriod,
    RestTrial,
    CustomerType,
}

impl Stream {
    const ALL: [Stream; 5] = [
        Stream::InterArrival,
        Stream::Service,
        Stream::RestPeriod,
        Stream::RestTrial,
        Stream::CustomerType,
    ];

    #[inline]
    fn index(self) -> u64 {
        self as u64
    }
}

// ── SimRandom ─────────────────────────────────────────────────────────────────

/// Seeded production random source.
///
/// Inter-arrival, service and rest durations are exponential with the
/// configured rates.  A resting rate of 0 is accepted and yields infinite
/// rests; [`CheckoutConfig::validate`] only allows it when servers never
/// rest.
pub struct SimRandom {
    streams:       [SmallRng; 5],
    inter_arrival: Exp<f64>,
    service:       Exp<f64>,
    rest:          Exp<f64>,
}

impl SimRandom {
    pub fn new(
        seed:          u64,
        arrival_rate:  f64,
        service_rate:  f64,
        resting_rate:  f64,
    ) -> CkResult<Self> {
        Ok(SimRandom {
            streams:       Stream::ALL.map(|s| stream_rng(seed, s)),
            inter_arrival: exp("arrival rate", arrival_rate)?,
            service:       exp("service rate", service_rate)?,
            rest:          exp("resting rate", resting_rate)?,
        })
    }

    /// Build from the seed and rates of a run configuration.
    pub fn from_config(config: &CheckoutConfig) -> CkResult<Self> {
        Self::new(
            config.seed,
            config.arrival_rate,
            config.service_rate,
            config.resting_rate,
        )
    }

    #[inline]
    fn rng(&mut self, stream: Stream) -> &mut SmallRng {
        &mut self.streams[stream.index() as usize]
    }
}

fn stream_rng(seed: u64, stream: Stream) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ stream.index().wrapping_mul(MIXING_CONSTANT))
}

fn exp(what: &str, rate: f64) -> CkResult<Exp<f64>> {
    Exp::new(rate).map_err(|e| CkError::Config(format!("{what} {rate}: {e}")))
}

impl RandomSource for SimRandom {
    fn inter_arrival_time(&mut self) -> f64 {
        let dist = self.inter_arrival;
        dist.sample(self.rng(Stream::InterArrival))
    }

    fn service_time(&mut self) -> f64 {
        let dist = self.service;
        dist.sample(self.rng(Stream::Service))
    }

    fn rest_period(&mut self) -> f64 {
        let dist = self.rest;
        dist.sample(self.rng(Stream::RestPeriod))
    }

    fn rest_trial(&mut self) -> f64 {
        self.rng(Stream::RestTrial).r#gen()
    }

    fn customer_type_trial(&mut self) -> f64 {
        self.rng(Stream::CustomerType).r#gen()
    }
}

// ── ScriptedRandom ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Script {
    values:   Vec<f64>,
    drawn:    usize,
    fallback: f64,
}

impl Script {
    fn new(fallback: f64) -> Self {
        Script { values: Vec::new(), drawn: 0, fallback }
    }

    fn next(&mut self) -> f64 {
        let value = match self.values.last() {
            None => self.fallback,
            Some(&last) => self.values.get(self.drawn).copied().unwrap_or(last),
        };
        self.drawn += 1;
        value
    }
}

/// A random source that replays fixed values.
///
/// Each stream returns its scripted values in order and then keeps repeating
/// the last one.  Unscripted streams return `1.0`: unit durations, and trials
/// that never fall below any probability (so nobody rests and nobody is
/// greedy).
///
/// ```rust
/// use ck_core::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new().service_times([5.0, 2.0]);
/// assert_eq!(rng.service_time(), 5.0);
/// assert_eq!(rng.service_time(), 2.0);
/// assert_eq!(rng.service_time(), 2.0);
/// assert_eq!(rng.rest_trial(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    scripts: [Script; 5],
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        ScriptedRandom { scripts: Stream::ALL.map(|_| Script::new(1.0)) }
    }
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the values returned by `stream`.
    pub fn script(mut self, stream: Stream, values: impl IntoIterator<Item = f64>) -> Self {
        self.scripts[stream.index() as usize].values = values.into_iter().collect();
        self
    }

    pub fn inter_arrivals(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(Stream::InterArrival, values)
    }

    pub fn service_times(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(Stream::Service, values)
    }

    pub fn rest_periods(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(Stream::RestPeriod, values)
    }

    pub fn rest_trials(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(Stream::RestTrial, values)
    }

    pub fn customer_types(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(Stream::CustomerType, values)
    }

    /// How many values have been drawn from `stream` so far.
    pub fn drawn(&self, stream: Stream) -> usize {
        self.scripts[stream.index() as usize].drawn
    }

    fn next(&mut self, stream: Stream) -> f64 {
        self.scripts[stream.index() as usize].next()
    }
}

impl RandomSource for ScriptedRandom {
    fn inter_arrival_time(&mut self) -> f64 {
        self.next(Stream::InterArrival)
    }
    fn service_time(&mut self) -> f64 {
        self.next(Stream::Service)
    }
    fn rest_period(&mut self) -> f64 {
        self.next(Stream::RestPeriod)
    }
    fn rest_trial(&mut self) -> f64 {
        self.next(Stream::RestTrial)
    }
    fn customer_type_trial(&mut self) -> f64 {
        self.next(Stream::CustomerType)
    }
}
