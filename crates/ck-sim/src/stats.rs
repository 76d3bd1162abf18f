//! Running statistics for one simulation.

use ck_event::{Action, Event};

/// Served / not-served counters and accumulated wait.
///
/// Updated by [`record`](Self::record) whenever the engine schedules an
/// event; only SERVED and LEAVES events count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    served:     u64,
    not_served: u64,
    total_wait: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a newly scheduled event.
    ///
    /// SERVED adds one service and its wait (service start minus arrival);
    /// LEAVES adds one unserved customer; everything else is ignored.
    pub fn record(&mut self, event: &Event) {
        match &event.action {
            Action::Served { customer, .. } => {
                self.served += 1;
                self.total_wait += event.time - customer.arrival_time;
            }
            Action::Leaves { .. } => self.not_served += 1,
            _ => {}
        }
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    pub fn not_served(&self) -> u64 {
        self.not_served
    }

    pub fn total_wait(&self) -> f64 {
        self.total_wait
    }

    /// Mean wait of served customers; 0 before anyone is served.
    pub fn average_wait(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait / self.served as f64
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            average_wait: self.average_wait(),
            served:       self.served,
            not_served:   self.not_served,
        }
    }
}

/// Final report of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub average_wait: f64,
    pub served:       u64,
    pub not_served:   u64,
}

impl Summary {
    /// Every customer ends up either served or not served.
    pub fn customers(&self) -> u64 {
        self.served + self.not_served
    }
}
