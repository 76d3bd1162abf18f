//! The seven things that can happen in a checkout.

use std::fmt;

use ck_core::ServerId;
use ck_entity::Customer;

/// What an [`Event`](crate::Event) does, together with the entities involved.
///
/// Each variant carries exactly the entities its action needs, so an
/// ARRIVES event cannot accidentally name a server and a SERVER_REST event
/// cannot name a customer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A human server starts a rest.  Not part of the visible log.
    ServerRest { server: ServerId },
    /// A human server is back from rest.  Not part of the visible log.
    ServerBack { server: ServerId },
    Arrives { customer: Customer },
    Leaves  { customer: Customer },
    Waits   { customer: Customer, server: ServerId },
    Served  { customer: Customer, server: ServerId },
    Done    { customer: Customer, server: ServerId },
}

/// Field-less mirror of [`Action`].
///
/// Declaration order is tie-break priority: earlier variants are processed
/// first among events at the same instant for the same customer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ActionKind {
    ServerRest,
    ServerBack,
    Arrives,
    Leaves,
    Waits,
    Served,
    Done,
}

impl ActionKind {
    /// Tie-break rank; lower runs first.
    #[inline]
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// SERVER_REST and SERVER_BACK drive the engine but never reach the log.
    #[inline]
    pub fn is_internal(self) -> bool {
        matches!(self, ActionKind::ServerRest | ActionKind::ServerBack)
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::ServerRest => "SERVER_REST",
            ActionKind::ServerBack => "SERVER_BACK",
            ActionKind::Arrives    => "ARRIVES",
            ActionKind::Leaves     => "LEAVES",
            ActionKind::Waits      => "WAITS",
            ActionKind::Served     => "SERVED",
            ActionKind::Done       => "DONE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ServerRest { .. } => ActionKind::ServerRest,
            Action::ServerBack { .. } => ActionKind::ServerBack,
            Action::Arrives { .. }    => ActionKind::Arrives,
            Action::Leaves { .. }     => ActionKind::Leaves,
            Action::Waits { .. }      => ActionKind::Waits,
            Action::Served { .. }     => ActionKind::Served,
            Action::Done { .. }       => ActionKind::Done,
        }
    }

    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Action::ServerRest { .. } | Action::ServerBack { .. } => None,
            Action::Arrives { customer }
            | Action::Leaves { customer }
            | Action::Waits { customer, .. }
            | Action::Served { customer, .. }
            | Action::Done { customer, .. } => Some(customer),
        }
    }

    pub fn server(&self) -> Option<ServerId> {
        match self {
            Action::Arrives { .. } | Action::Leaves { .. } => None,
            Action::ServerRest { server }
            | Action::ServerBack { server }
            | Action::Waits { server, .. }
            | Action::Served { server, .. }
            | Action::Done { server, .. } => Some(*server),
        }
    }
}
