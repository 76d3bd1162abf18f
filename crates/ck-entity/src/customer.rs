//! Customers and their up-front generation.

use std::cmp::Ordering;
use std::fmt;

use ck_core::{CustomerId, RandomSource, SimTime};

/// One arriving customer.  Immutable after creation.
///
/// Customers order by arrival time, then id: the order in which they stand
/// in any waiting line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:           CustomerId,
    pub arrival_time: SimTime,
    /// Greedy customers who must wait join the globally shortest line.
    pub greedy:       bool,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: SimTime, greedy: bool) -> Self {
        Self { id, arrival_time, greedy }
    }
}

impl PartialOrd for Customer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Customer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.arrival_time
            .cmp(&other.arrival_time)
            .then(self.id.cmp(&other.id))
    }
}

/// `7` for a typical customer, `7(greedy)` for a greedy one.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.greedy {
            write!(f, "{}(greedy)", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}

/// Create all `count` customers, numbered from 1.
///
/// Customer 1 arrives at time 0.  For every later customer the inter-arrival
/// gap is drawn first and then the customer-type trial, so the draw order
/// (and therefore the run) is fixed by the seed alone.
pub fn generate_customers<R: RandomSource + ?Sized>(
    count:              u32,
    greedy_probability: f64,
    rng:                &mut R,
) -> Vec<Customer> {
    let mut customers = Vec::with_capacity(count as usize);
    let mut arrival = SimTime::ZERO;

    for i in 0..count as usize {
        if i > 0 {
            arrival = arrival + rng.inter_arrival_time();
        }
        let greedy = rng.customer_type_trial() < greedy_probability;
        customers.push(Customer::new(CustomerId::from_slot(i), arrival, greedy));
    }

    customers
}
