use ck_core::CustomerId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("no servers on the floor to route customer {0}")]
    NoServers(CustomerId),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
