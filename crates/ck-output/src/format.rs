//! The event-log line format.
//!
//! ```text
//! 0.000 1 arrives
//! 0.000 1 served by server 1
//! 0.500 2(greedy) arrives
//! 0.500 2(greedy) waits to be served by self-check 3
//! 1.000 1 done serving by server 1
//! [0.250 2 0]
//! ```

use ck_core::ServerId;
use ck_entity::{ServerFloor, ServerKind};
use ck_event::{ActionKind, Event};
use ck_sim::Summary;

use crate::{EventRow, OutputResult};

/// Server kind by id, captured from the floor before the run starts so that
/// observers can label servers without borrowing the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerLabels {
    kinds: Vec<ServerKind>,
}

impl ServerLabels {
    pub fn from_floor(floor: &ServerFloor) -> Self {
        Self { kinds: floor.servers().iter().map(|s| s.kind).collect() }
    }

    /// Human servers `1..=humans`, then self-checkout counters.
    pub fn new(humans: u32, self_checkouts: u32) -> Self {
        let kinds = std::iter::repeat_n(ServerKind::Human, humans as usize)
            .chain(std::iter::repeat_n(ServerKind::SelfCheckout, self_checkouts as usize))
            .collect();
        Self { kinds }
    }

    pub fn kind(&self, id: ServerId) -> Option<ServerKind> {
        self.kinds.get(id.slot()).copied()
    }
}

/// The words after the customer label; `None` for internal actions.
fn verb(action: ActionKind) -> Option<&'static str> {
    Some(match action {
        ActionKind::Arrives => "arrives",
        ActionKind::Leaves  => "leaves",
        ActionKind::Waits   => "waits to be served by",
        ActionKind::Served  => "served by",
        ActionKind::Done    => "done serving by",
        ActionKind::ServerRest | ActionKind::ServerBack => return None,
    })
}

/// `<time> <customer> <verb> [<server>]`, time to three decimals.
pub fn format_row(row: &EventRow) -> String {
    let mut line = format!("{:.3} {}", row.time, row.customer);
    if row.greedy {
        line.push_str("(greedy)");
    }
    if let Some(verb) = verb(row.action) {
        line.push(' ');
        line.push_str(verb);
    }
    if let Some((kind, id)) = row.server {
        line.push_str(&format!(" {} {id}", kind.label()));
    }
    line
}

/// Log line for `event`, or `None` for internal events.
pub fn format_event(event: &Event, labels: &ServerLabels) -> OutputResult<Option<String>> {
    Ok(EventRow::from_event(event, labels)?.map(|row| format_row(&row)))
}

/// `[<average wait> <served> <not served>]`.
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "[{:.3} {} {}]",
        summary.average_wait, summary.served, summary.not_served
    )
}
