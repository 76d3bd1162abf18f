//! Simulation observer trait for logging and data collection.

use ck_event::Event;

use crate::{Anomaly, Summary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] while the queue drains.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event) {
///         if event.is_visible() {
///             println!("{} {}", event.time, event.kind());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every event, internal ones included, just before it is
    /// dispatched.  Events arrive in processing order.
    fn on_event(&mut self, _event: &Event) {}

    /// Called when the engine detects a broken invariant.
    fn on_anomaly(&mut self, _anomaly: &Anomaly) {}

    /// Called once after the queue has drained.
    fn on_sim_end(&mut self, _summary: &Summary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every processed event, in order.
impl SimObserver for Vec<Event> {
    fn on_event(&mut self, event: &Event) {
        self.push(*event);
    }
}
