//! `EventQueue` — the engine's agenda.
//!
//! A `BinaryHeap` of `Reverse<Event>` gives O(log N) push and pop of the
//! smallest event under [`Event`]'s total order.  Nothing is ever cancelled:
//! every pushed event is popped exactly once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ck_core::SimTime;
use ck_entity::Customer;

use crate::Event;

/// A min-priority queue of events.
#[derive(Default, Clone, Debug)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the queue with an ARRIVES event for every customer.
    pub fn from_arrivals(customers: &[Customer]) -> Self {
        let mut queue = Self { heap: BinaryHeap::with_capacity(customers.len()) };
        for &customer in customers {
            queue.push(Event::arrives(customer));
        }
        queue
    }

    pub fn push(&mut self, event: Event) {
        self.heap.push(Reverse(event));
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    /// The event `pop` would return next.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    /// Instant of the earliest queued event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.peek().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
