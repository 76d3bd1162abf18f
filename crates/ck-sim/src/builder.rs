//! Fluent builder for constructing a [`Sim`].

use log::{info, warn};

use ck_core::{CheckoutConfig, CustomerId, RandomSource, SimTime};
use ck_entity::{Customer, ServerFloor, generate_customers};
use ck_event::EventQueue;

use crate::{Sim, SimError, SimResult, Statistics};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`CheckoutConfig`] — server counts, queue limit, rates, probabilities
/// - `R: RandomSource` — e.g. [`ck_core::SimRandom`] or, in tests,
///   [`ck_core::ScriptedRandom`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                      |
/// |---------------------|----------------------------------------------|
/// | `.customers(v)`     | Generated from the random source             |
/// | `.strict(b)`        | `false`: anomalies are logged, not fatal     |
///
/// # Example
///
/// ```rust,ignore
/// let rng = SimRandom::from_config(&config)?;
/// let mut sim = SimBuilder::new(config, rng).strict(true).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource> {
    config:    CheckoutConfig,
    rng:       R,
    customers: Option<Vec<Customer>>,
    strict:    bool,
}

impl<R: RandomSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: CheckoutConfig, rng: R) -> Self {
        Self { config, rng, customers: None, strict: false }
    }

    /// Supply the customers directly (must be length `config.customers`).
    ///
    /// Ids must run `1..=n` in order and arrival times must not decrease.
    /// If not called, customers are drawn from the random source.
    pub fn customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = Some(customers);
        self
    }

    /// Turn the first anomaly of the run into [`SimError::Invariant`].
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate inputs, seed the event queue with every arrival and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        // ── Resolve customers ─────────────────────────────────────────────
        let expected = self.config.customers as usize;
        let customers = match self.customers {
            Some(c) => {
                if c.len() != expected {
                    return Err(SimError::CustomerCountMismatch { expected, got: c.len() });
                }
                check_customers(&c)?;
                c
            }
            None => generate_customers(
                self.config.customers,
                self.config.greedy_probability,
                &mut self.rng,
            ),
        };

        // ── Lay out the floor ─────────────────────────────────────────────
        if self.config.server_count() == 0 {
            warn!("no servers configured; every customer will leave");
        }
        let floor = ServerFloor::new(self.config.human_servers, self.config.self_checkouts)
            .with_rest_probability(self.config.rest_probability);

        let queue = EventQueue::from_arrivals(&customers);
        info!(
            "built floor with {} servers and {} lines; {} arrivals queued",
            floor.len(),
            floor.lines().len(),
            queue.len(),
        );

        Ok(Sim {
            config:    self.config,
            floor,
            customers,
            queue,
            stats:     Statistics::new(),
            rng:       self.rng,
            anomalies: Vec::new(),
            strict:    self.strict,
            now:       SimTime::ZERO,
            processed: 0,
        })
    }
}

/// Ids `1..=n` in order, arrivals non-decreasing and non-negative.
fn check_customers(customers: &[Customer]) -> SimResult<()> {
    let mut last = SimTime::ZERO;
    for (i, c) in customers.iter().enumerate() {
        let want = CustomerId::from_slot(i);
        if c.id != want {
            return Err(SimError::Config(format!(
                "customer at position {i} has id {}, expected {want}",
                c.id
            )));
        }
        if !c.arrival_time.as_f64().is_finite() || c.arrival_time < last {
            return Err(SimError::Config(format!(
                "customer {} arrives at {}, before the previous arrival at {last}",
                c.id, c.arrival_time
            )));
        }
        last = c.arrival_time;
    }
    Ok(())
}
