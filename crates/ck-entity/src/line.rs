//! `WaitLine` — customers waiting for one human server or for self-checkout.

use std::collections::VecDeque;

use ck_core::CustomerId;

use crate::Customer;

/// A waiting line kept in customer order (arrival time, then id).
///
/// Its length is the line's queue-length counter; there is no separate count
/// to drift out of sync.
///
/// A free server *claims* the first unclaimed customer and starts serving
/// them a moment later.  Claimed customers stay in the line (and count
/// towards its length) until their service begins, but no other server can
/// claim them.  Claims always form a prefix of the line.
#[derive(Clone, Debug, Default)]
pub struct WaitLine {
    customers: VecDeque<Customer>,
    claimed:   usize,
}

impl WaitLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `customer` at its ordered position.
    ///
    /// Customers normally join in arrival order, so this is an append; the
    /// ordered insert only matters if a later arrival was queued first.
    pub fn push(&mut self, customer: Customer) {
        let at = self
            .customers
            .partition_point(|c| *c <= customer)
            .max(self.claimed);
        self.customers.insert(at, customer);
    }

    /// Remove and return the customer at the front, releasing their claim.
    /// Empty lines yield `None`.
    pub fn pop_front(&mut self) -> Option<Customer> {
        let front = self.customers.pop_front()?;
        self.claimed = self.claimed.saturating_sub(1);
        Some(front)
    }

    pub fn front(&self) -> Option<&Customer> {
        self.customers.front()
    }

    /// The customer the next [`claim`](Self::claim) would return.
    pub fn next_unclaimed(&self) -> Option<&Customer> {
        self.customers.get(self.claimed)
    }

    /// Reserve the first unclaimed customer for a server.
    pub fn claim(&mut self) -> Option<Customer> {
        let customer = self.customers.get(self.claimed).copied()?;
        self.claimed += 1;
        Some(customer)
    }

    /// Number of customers already promised to a server.
    pub fn claimed(&self) -> usize {
        self.claimed
    }

    /// Remove `id` from anywhere in the line.  Returns whether it was present.
    pub fn remove(&mut self, id: CustomerId) -> bool {
        match self.customers.iter().position(|c| c.id == id) {
            Some(i) => {
                self.customers.remove(i);
                if i < self.claimed {
                    self.claimed -= 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }
}
