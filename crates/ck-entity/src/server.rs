//! Servers: human staff and self-checkout counters.

use std::fmt;

use ck_core::{ServerId, SimTime};

/// The two kinds of server on the floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServerKind {
    /// Owns a private line and may rest after a service.
    Human,
    /// Shares the self-checkout line and never rests.
    SelfCheckout,
}

impl ServerKind {
    /// Prefix used in the event log.
    pub fn label(self) -> &'static str {
        match self {
            ServerKind::Human        => "server",
            ServerKind::SelfCheckout => "self-check",
        }
    }

    #[inline]
    pub fn can_rest(self) -> bool {
        matches!(self, ServerKind::Human)
    }
}

/// Index of a waiting line inside a [`ServerFloor`](crate::ServerFloor).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineId(pub u32);

impl LineId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One server and its mutable availability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Server {
    pub id:         ServerId,
    pub kind:       ServerKind,
    /// Earliest instant this server can begin another service.
    pub free_after: SimTime,
    /// The line this server pulls customers from.
    pub line:       LineId,
}

impl Server {
    pub fn new(id: ServerId, kind: ServerKind, line: LineId) -> Self {
        Self { id, kind, free_after: SimTime::ZERO, line }
    }
}

/// `server 2` or `self-check 4`.
impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.id)
    }
}
