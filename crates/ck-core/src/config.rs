//! Run configuration.
//!
//! A run is fully described by ten numbers, read once at startup in this
//! order:
//!
//! ```text
//! seed  human_servers  self_checkouts  max_queue_length  customers
//! arrival_rate  service_rate  resting_rate  rest_probability  greedy_probability
//! ```
//!
//! [`CheckoutConfig::from_tokens`] accepts them whitespace-separated (any mix
//! of spaces and newlines), the way the simulator reads them from stdin.

use std::str::FromStr;

use crate::{CkError, CkResult};

/// Top-level simulation configuration.  Immutable once the run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckoutConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of human servers, numbered `1..=human_servers`.
    pub human_servers: u32,

    /// Number of self-checkout counters, numbered after the human servers.
    /// All counters share one waiting line.
    pub self_checkouts: u32,

    /// Longest a waiting line may grow (`Qmax`).  0 means nobody waits.
    pub max_queue_length: usize,

    /// Number of customers generated up front.
    pub customers: u32,

    /// Rate of the exponential inter-arrival distribution.
    pub arrival_rate: f64,

    /// Rate of the exponential service-time distribution.
    pub service_rate: f64,

    /// Rate of the exponential rest-period distribution.
    pub resting_rate: f64,

    /// Probability that a human server rests after finishing a service.
    pub rest_probability: f64,

    /// Probability that a generated customer is greedy.
    pub greedy_probability: f64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            seed:               1,
            human_servers:      1,
            self_checkouts:     0,
            max_queue_length:   1,
            customers:          10,
            arrival_rate:       1.0,
            service_rate:       1.0,
            resting_rate:       0.0,
            rest_probability:   0.0,
            greedy_probability: 0.0,
        }
    }
}

impl CheckoutConfig {
    /// Parse the ten whitespace-separated parameters.
    ///
    /// Trailing tokens are an error so that a misaligned input file is not
    /// silently half-read.  The result is validated before it is returned.
    pub fn from_tokens(input: &str) -> CkResult<Self> {
        let mut tokens = input.split_whitespace();
        let config = Self {
            seed:               next_token(&mut tokens, "seed")?,
            human_servers:      next_token(&mut tokens, "number of servers")?,
            self_checkouts:     next_token(&mut tokens, "number of self-checkout counters")?,
            max_queue_length:   next_token(&mut tokens, "maximum queue length")?,
            customers:          next_token(&mut tokens, "number of customers")?,
            arrival_rate:       next_token(&mut tokens, "arrival rate")?,
            service_rate:       next_token(&mut tokens, "service rate")?,
            resting_rate:       next_token(&mut tokens, "resting rate")?,
            rest_probability:   next_token(&mut tokens, "resting probability")?,
            greedy_probability: next_token(&mut tokens, "greedy probability")?,
        };
        if let Some(extra) = tokens.next() {
            return Err(CkError::Parse(format!(
                "unexpected trailing token {extra:?} after the ten parameters"
            )));
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the server counts, rates and probabilities for values the
    /// simulation cannot use.
    pub fn validate(&self) -> CkResult<()> {
        if self.human_servers.checked_add(self.self_checkouts).is_none() {
            return Err(CkError::Config(format!(
                "{} human servers plus {} self-checkouts is too many servers",
                self.human_servers, self.self_checkouts
            )));
        }

        positive_rate("arrival rate", self.arrival_rate)?;
        positive_rate("service rate", self.service_rate)?;

        if !(self.resting_rate >= 0.0) || !self.resting_rate.is_finite() {
            return Err(CkError::Config(format!(
                "resting rate must be a finite non-negative number, got {}",
                self.resting_rate
            )));
        }

        probability("resting probability", self.rest_probability)?;
        probability("greedy probability", self.greedy_probability)?;

        if self.rest_probability > 0.0 && self.resting_rate == 0.0 {
            return Err(CkError::Config(
                "resting rate must be positive when servers may rest".into(),
            ));
        }
        Ok(())
    }

    /// Total number of servers, human and self-checkout.
    #[inline]
    pub fn server_count(&self) -> u32 {
        self.human_servers.saturating_add(self.self_checkouts)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn next_token<'a, T>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> CkResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = tokens
        .next()
        .ok_or_else(|| CkError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|e| CkError::Parse(format!("invalid {what} {token:?}: {e}")))
}

fn positive_rate(what: &str, rate: f64) -> CkResult<()> {
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(CkError::Config(format!(
            "{what} must be a finite positive number, got {rate}"
        )))
    }
}

fn probability(what: &str, p: f64) -> CkResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(CkError::Config(format!("{what} must lie in [0, 1], got {p}")))
    }
}
