use ck_core::{CkError, CustomerId, ServerId, SimTime};
use ck_entity::OutOfTurn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{got} customers supplied but the configuration asks for {expected}")]
    CustomerCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Core(#[from] CkError),

    #[error("invariant violated: {0}")]
    Invariant(Anomaly),
}

pub type SimResult<T> = Result<T, SimError>;

/// A broken invariant noticed while processing an event.
///
/// Anomalies never stop a default run: the engine logs them, keeps them in
/// [`Sim::anomalies`](crate::Sim::anomalies) and carries on.  A strict run
/// (see [`SimBuilder::strict`](crate::SimBuilder::strict)) fails on the first
/// one instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// A customer arrived at a floor with no servers; they leave unserved.
    #[error("customer {customer} arrived at {at} but there are no servers")]
    NoServers {
        at:       SimTime,
        customer: CustomerId,
    },

    /// A customer was served while someone else stood at the front of the line.
    #[error("server {server} served customer {customer} out of turn at {at}")]
    OutOfTurn {
        at:       SimTime,
        server:   ServerId,
        customer: CustomerId,
        /// Front of the line at the time.  They keep their place.
        expected: CustomerId,
    },
}

impl Anomaly {
    pub(crate) fn out_of_turn(at: SimTime, fault: OutOfTurn) -> Self {
        Anomaly::OutOfTurn {
            at,
            server:   fault.server,
            customer: fault.customer,
            expected: fault.expected,
        }
    }
}
