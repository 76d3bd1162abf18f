//! The `Sim` struct and its dispatch loop.

use log::{debug, error, info, trace};

use ck_core::{CheckoutConfig, RandomSource, ServerId, SimTime};
use ck_entity::{Customer, Route, RoutingError, ServerFloor, choose_server};
use ck_event::{Action, Event, EventQueue};

use crate::{Anomaly, NoopObserver, SimError, SimObserver, SimResult, Statistics, Summary};

// ── Transition ────────────────────────────────────────────────────────────────

/// What dispatching one event produced.  Every row of the transition table
/// yields at most one follow-up event.
#[derive(Default)]
struct Transition {
    next:    Option<Event>,
    anomaly: Option<Anomaly>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn then(event: Event) -> Self {
        Self { next: Some(event), anomaly: None }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` holds all state of one run: the floor, the customers, the event
/// queue, the statistics and the random source.  Nothing is global, so
/// independent runs can live side by side (see [`crate::batch`]).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    /// The run parameters.
    pub config: CheckoutConfig,

    /// Servers and their waiting lines.
    pub floor: ServerFloor,

    /// Every customer, indexed by `CustomerId::slot`.
    pub customers: Vec<Customer>,

    /// Pending events.
    pub queue: EventQueue,

    /// Running served / not-served counters.
    pub stats: Statistics,

    /// Source of service times, rest trials and rest periods.
    pub rng: R,

    pub(crate) anomalies: Vec<Anomaly>,
    pub(crate) strict:    bool,
    pub(crate) now:       SimTime,
    pub(crate) processed: u64,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process events until the queue is empty and return the summary.
    ///
    /// Calls observer hooks for every event.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        info!(
            "starting run: {} servers, {} self-checkouts, {} customers, seed {}",
            self.config.human_servers,
            self.config.self_checkouts,
            self.customers.len(),
            self.config.seed,
        );

        while self.step_with(observer)?.is_some() {}

        let summary = self.summary();
        info!(
            "run finished at {} after {} events: served {}, not served {}, average wait {:.3}",
            self.now, self.processed, summary.served, summary.not_served, summary.average_wait,
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Process exactly one event.  Returns `None` once the queue is empty.
    ///
    /// Useful for tests and incremental stepping.
    pub fn step(&mut self) -> SimResult<Option<Event>> {
        self.step_with(&mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        let Some(event) = self.queue.pop() else {
            return Ok(None);
        };
        debug_assert!(event.time >= self.now, "event queue went back in time");
        self.now = event.time;
        self.processed += 1;

        trace!("dispatch {} at {}", event.kind(), event.time);
        observer.on_event(&event);

        let transition = self.transition(&event);

        if let Some(anomaly) = transition.anomaly {
            error!("{anomaly}");
            self.anomalies.push(anomaly);
            observer.on_anomaly(&anomaly);
            if self.strict {
                return Err(SimError::Invariant(anomaly));
            }
        }

        if let Some(next) = transition.next {
            self.schedule(next);
        }

        Ok(Some(event))
    }

    /// Counters as they stand now.
    pub fn summary(&self) -> Summary {
        self.stats.summary()
    }

    /// Every anomaly seen so far, in the order detected.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Instant of the most recently processed event.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of events processed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    // ── Transition table ──────────────────────────────────────────────────

    /// Apply `event` to the floor and decide what follows it.
    fn transition(&mut self, event: &Event) -> Transition {
        let now = event.time;

        match event.action {
            // ── ARRIVES: routing decides serve / wait / leave ──────────────
            Action::Arrives { customer } => {
                match choose_server(&customer, &self.floor, self.config.max_queue_length) {
                    Ok(Route::ServeNow(server)) => {
                        Transition::then(Event::served(now, customer, server))
                    }
                    Ok(Route::Wait(server)) => Transition::then(Event::waits(now, customer, server)),
                    Ok(Route::Leave) => Transition::then(Event::leaves(now, customer)),
                    // No servers at all: the customer still leaves so every
                    // customer is accounted for.
                    Err(RoutingError::NoServers(id)) => Transition {
                        next:    Some(Event::leaves(now, customer)),
                        anomaly: Some(Anomaly::NoServers { at: now, customer: id }),
                    },
                }
            }

            // ── SERVED: start service, finish later ────────────────────────
            Action::Served { customer, server } => {
                let start = self.floor.begin_service(server, &customer, now, &mut self.rng);
                Transition {
                    next:    Some(Event::done(start.done_at, customer, server)),
                    anomaly: start.out_of_turn.map(|f| Anomaly::out_of_turn(now, f)),
                }
            }

            // ── WAITS: the customer now lives in a line ────────────────────
            Action::Waits { customer, server } => {
                self.floor.enqueue(server, customer);
                Transition::none()
            }

            // ── DONE: rest, or pull the next customer ──────────────────────
            Action::Done { server, .. } => {
                if self.floor.needs_rest(server, &mut self.rng) {
                    Transition::then(Event::server_rest(now, server))
                } else {
                    self.serve_next(server, now)
                }
            }

            // ── SERVER_REST: away until the drawn rest period ends ─────────
            Action::ServerRest { server } => {
                let back_at = self.floor.rest_from(server, now, &mut self.rng);
                Transition::then(Event::server_back(back_at, server))
            }

            // ── SERVER_BACK: pull the next customer ────────────────────────
            Action::ServerBack { server } => self.serve_next(server, now),

            Action::Leaves { .. } => Transition::none(),
        }
    }

    /// SERVED for the next unclaimed customer in `server`'s line, if anyone.
    fn serve_next(&mut self, server: ServerId, now: SimTime) -> Transition {
        match self.floor.claim_next(server) {
            Some(customer) => Transition::then(Event::served(now, customer, server)),
            None => Transition::none(),
        }
    }

    /// Record `event` in the statistics and put it on the queue.
    fn schedule(&mut self, event: Event) {
        self.stats.record(&event);
        debug!("schedule {} at {}", event.kind(), event.time);
        self.queue.push(event);
    }
}
