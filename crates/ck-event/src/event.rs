//! `Event` — an action at an instant.

use std::cmp::Ordering;

use ck_core::{ServerId, SimTime};
use ck_entity::Customer;

use crate::{Action, ActionKind};

/// One scheduled occurrence.  Immutable once built; constructing an event
/// has no side effects.
#[derive(Copy, Clone, Debug)]
pub struct Event {
    pub time:   SimTime,
    pub action: Action,
}

impl Event {
    pub fn new(time: SimTime, action: Action) -> Self {
        Self { time, action }
    }

    /// The customer's arrival, at its arrival time.
    pub fn arrives(customer: Customer) -> Self {
        Self::new(customer.arrival_time, Action::Arrives { customer })
    }

    pub fn leaves(time: SimTime, customer: Customer) -> Self {
        Self::new(time, Action::Leaves { customer })
    }

    pub fn waits(time: SimTime, customer: Customer, server: ServerId) -> Self {
        Self::new(time, Action::Waits { customer, server })
    }

    pub fn served(time: SimTime, customer: Customer, server: ServerId) -> Self {
        Self::new(time, Action::Served { customer, server })
    }

    pub fn done(time: SimTime, customer: Customer, server: ServerId) -> Self {
        Self::new(time, Action::Done { customer, server })
    }

    pub fn server_rest(time: SimTime, server: ServerId) -> Self {
        Self::new(time, Action::ServerRest { server })
    }

    pub fn server_back(time: SimTime, server: ServerId) -> Self {
        Self::new(time, Action::ServerBack { server })
    }

    #[inline]
    pub fn kind(&self) -> ActionKind {
        self.action.kind()
    }

    #[inline]
    pub fn customer(&self) -> Option<&Customer> {
        self.action.customer()
    }

    #[inline]
    pub fn server(&self) -> Option<ServerId> {
        self.action.server()
    }

    /// Whether this event belongs in the user-visible log.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.kind().is_internal()
    }

    /// (time, customer id or 0, action kind, server id or 0).
    fn sort_key(&self) -> (SimTime, u32, ActionKind, u32) {
        (
            self.time,
            self.customer().map_or(0, |c| c.id.0),
            self.kind(),
            self.server().map_or(0, |s| s.0),
        )
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Earlier events compare as smaller.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
