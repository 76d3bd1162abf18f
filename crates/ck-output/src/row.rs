//! Plain data row types written by output backends.

use ck_entity::ServerKind;
use ck_event::{ActionKind, Event};

use crate::{OutputError, OutputResult, ServerLabels};

/// One visible event, flattened for writers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub time:        f64,
    pub customer:    u32,
    pub greedy:      bool,
    pub action:      ActionKind,
    /// Kind and id of the server involved; `None` for ARRIVES and LEAVES.
    pub server:      Option<(ServerKind, u32)>,
}

impl EventRow {
    /// Flatten `event`.  Internal events (server rest and return) have no
    /// row and yield `Ok(None)`.  A server id `labels` does not know is an
    /// error.
    pub fn from_event(event: &Event, labels: &ServerLabels) -> OutputResult<Option<Self>> {
        let Some(customer) = event.customer().filter(|_| event.is_visible()) else {
            return Ok(None);
        };
        let server = event
            .server()
            .map(|id| {
                labels
                    .kind(id)
                    .map(|kind| (kind, id.0))
                    .ok_or(OutputError::UnknownServer(id.0))
            })
            .transpose()?;

        Ok(Some(Self {
            time:     event.time.as_f64(),
            customer: customer.id.0,
            greedy:   customer.greedy,
            action:   event.kind(),
            server,
        }))
    }
}
