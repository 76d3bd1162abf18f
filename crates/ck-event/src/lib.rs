//! `ck-event` — what happens, when, and in which order.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`action`]   | `Action` (sum type carrying its entities), `ActionKind`      |
//! | [`event`]    | `Event` and its total order                                  |
//! | [`queue`]    | `EventQueue` (min-heap of `Event`s)                          |
//!
//! # Ordering (summary)
//!
//! ```text
//! 1. time             ascending
//! 2. customer id      ascending (events without a customer use 0)
//! 3. action priority  SERVER_REST < SERVER_BACK < ARRIVES < LEAVES
//!                     < WAITS < SERVED < DONE
//! 4. server id        ascending (events without a server use 0)
//! ```
//!
//! Key 2 puts a server's rest bookkeeping ahead of every customer-facing
//! event at the same instant, which is exactly what the action priority asks
//! for.  Key 4 only separates two server events at the same instant, so the
//! pop sequence is fully determined by the queue contents.

pub mod action;
pub mod event;
pub mod queue;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionKind};
pub use event::Event;
pub use queue::EventQueue;
