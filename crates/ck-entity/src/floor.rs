//! `ServerFloor` — every server, every waiting line, and the server-side
//! state transitions the engine drives.

use log::{trace, warn};

use ck_core::{CustomerId, RandomSource, ServerId, SimTime};

use crate::{Customer, LineId, Server, ServerKind, WaitLine};

/// Result of [`ServerFloor::begin_service`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ServiceStart {
    /// When the service completes (the server's new `free_after`).
    pub done_at:     SimTime,
    /// Set when the served customer was not at the front of the line.
    pub out_of_turn: Option<OutOfTurn>,
}

/// A customer was served while someone else stood at the front of the line.
///
/// This means the caller scheduled services in the wrong order.  The service
/// still goes ahead; the engine decides how loudly to complain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutOfTurn {
    pub server:   ServerId,
    pub customer: CustomerId,
    /// Who was at the front of the line.  They keep their place.
    pub expected: CustomerId,
}

/// All servers and lines on the checkout floor.
///
/// Servers are stored in id order: human servers `1..=H` first, then
/// self-checkout counters `H+1..=H+S`.  Human server `i` owns line `i-1`;
/// every self-checkout counter shares line `H`.
#[derive(Clone, Debug)]
pub struct ServerFloor {
    servers:          Vec<Server>,
    lines:            Vec<WaitLine>,
    /// Chance that a human server rests after a service.
    rest_probability: f64,
}

impl ServerFloor {
    /// Lay out `humans` human servers followed by `self_checkouts` counters.
    pub fn new(humans: u32, self_checkouts: u32) -> Self {
        let mut servers = Vec::with_capacity(humans as usize + self_checkouts as usize);
        let mut lines = Vec::with_capacity(humans as usize + 1);

        for i in 0..humans {
            lines.push(WaitLine::new());
            servers.push(Server::new(ServerId(i + 1), ServerKind::Human, LineId(i)));
        }

        if self_checkouts > 0 {
            let shared = LineId(lines.len() as u32);
            lines.push(WaitLine::new());
            for i in 0..self_checkouts {
                servers.push(Server::new(
                    ServerId(humans + i + 1),
                    ServerKind::SelfCheckout,
                    shared,
                ));
            }
        }

        Self { servers, lines, rest_probability: 0.0 }
    }

    /// Set the probability that a human server rests after a service.
    pub fn with_rest_probability(mut self, p: f64) -> Self {
        self.rest_probability = p;
        self
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// All servers in id order.
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Look up a server by id.
    ///
    /// # Panics
    /// Panics if `id` is not on this floor.  Ids only come from the floor
    /// itself, so a miss is a programming error.
    pub fn server(&self, id: ServerId) -> &Server {
        &self.servers[id.slot()]
    }

    /// All lines: one per human server, then the shared self-checkout line.
    pub fn lines(&self) -> &[WaitLine] {
        &self.lines
    }

    /// The line `id` pulls from (the shared line for self-checkout).
    pub fn line(&self, id: ServerId) -> &WaitLine {
        &self.lines[self.server(id).line.index()]
    }

    /// The shared self-checkout line, if there are any counters.
    pub fn shared_line(&self) -> Option<&WaitLine> {
        self.servers
            .iter()
            .find(|s| s.kind == ServerKind::SelfCheckout)
            .map(|s| &self.lines[s.line.index()])
    }

    /// Queue length as seen from `id`.  Every self-checkout counter reports
    /// the shared line's length.
    pub fn queue_length(&self, id: ServerId) -> usize {
        self.line(id).len()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// True iff nobody waits for `id` and `customer` arrives no earlier than
    /// the server's `free_after`.
    pub fn can_serve_immediately(&self, id: ServerId, customer: &Customer) -> bool {
        self.line(id).is_empty() && customer.arrival_time >= self.server(id).free_after
    }

    /// The server a greedy customer would join: shortest line first, then
    /// smallest id.
    pub fn shortest_line(&self) -> Option<ServerId> {
        self.servers
            .iter()
            .min_by_key(|s| (self.queue_length(s.id), s.id))
            .map(|s| s.id)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Reserve the next waiting customer for `id`.
    ///
    /// Servers sharing a line never claim the same customer, even when they
    /// free up at the same instant.
    pub fn claim_next(&mut self, id: ServerId) -> Option<Customer> {
        let line = self.servers[id.slot()].line;
        self.lines[line.index()].claim()
    }

    /// Start serving `customer` at `now`.
    ///
    /// Pops the customer off the front of the server's line (a no-op when the
    /// customer was served straight from arrival and the line is empty),
    /// draws a service time and moves `free_after` to the completion
    /// instant.  If someone else stands at the front, they keep their place:
    /// `customer` is taken out of the line wherever it is and the fault is
    /// reported in [`ServiceStart::out_of_turn`].
    pub fn begin_service<R: RandomSource + ?Sized>(
        &mut self,
        id:       ServerId,
        customer: &Customer,
        now:      SimTime,
        rng:      &mut R,
    ) -> ServiceStart {
        let line = &mut self.lines[self.servers[id.slot()].line.index()];

        let out_of_turn = match line.front().map(|c| c.id) {
            None => None,
            Some(front) if front == customer.id => {
                line.pop_front();
                None
            }
            Some(front) => {
                line.remove(customer.id);
                warn!("server {id} served customer {} out of turn, {front} was first", customer.id);
                Some(OutOfTurn { server: id, customer: customer.id, expected: front })
            }
        };

        let done_at = now + rng.service_time();
        self.servers[id.slot()].free_after = done_at;
        trace!("server {id} serving customer {} until {done_at}", customer.id);

        ServiceStart { done_at, out_of_turn }
    }

    /// Put `customer` in the line `id` pulls from.
    pub fn enqueue(&mut self, id: ServerId, customer: Customer) {
        let line = self.servers[id.slot()].line;
        self.lines[line.index()].push(customer);
    }

    /// Decide whether `id` rests after finishing a service.
    ///
    /// Self-checkout counters never rest and do not consume a draw.
    pub fn needs_rest<R: RandomSource + ?Sized>(&self, id: ServerId, rng: &mut R) -> bool {
        if !self.server(id).kind.can_rest() {
            return false;
        }
        let trial = rng.rest_trial();
        trial < self.rest_probability
    }

    /// Begin a rest at `now`; returns the instant the server is back.
    pub fn rest_from<R: RandomSource + ?Sized>(
        &mut self,
        id:  ServerId,
        now: SimTime,
        rng: &mut R,
    ) -> SimTime {
        let back_at = now + rng.rest_period();
        self.servers[id.slot()].free_after = back_at;
        trace!("server {id} resting until {back_at}");
        back_at
    }
}
