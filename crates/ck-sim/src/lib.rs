//! `ck-sim` — the discrete-event engine for the checkout simulator.
//!
//! # Dispatch loop
//!
//! ```text
//! seed: one ARRIVES per customer
//! while let Some(event) = queue.pop():
//!   ① notify   — observer.on_event(&event)
//!   ② dispatch — transition(event) mutates the floor and yields at most
//!                one follow-up event (and possibly an anomaly)
//!   ③ record   — statistics see the follow-up (SERVED / LEAVES)
//!   ④ schedule — follow-up pushed onto the queue
//! ```
//!
//! | Event       | Follow-up                                                   |
//! |-------------|-------------------------------------------------------------|
//! | ARRIVES     | SERVED, WAITS or LEAVES, same instant                       |
//! | SERVED      | DONE at completion                                          |
//! | WAITS       | —                                                           |
//! | DONE        | SERVER_REST now, or SERVED for the line front now, or —     |
//! | SERVER_REST | SERVER_BACK at rest end                                     |
//! | SERVER_BACK | SERVED for the line front now, or —                         |
//! | LEAVES      | —                                                           |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`batch::run_batch`] runs on Rayon's thread pool.      |
//! | `serde`    | `Serialize`/`Deserialize` on [`Summary`].              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ck_core::{CheckoutConfig, SimRandom};
//! use ck_sim::{NoopObserver, SimBuilder};
//!
//! let rng = SimRandom::from_config(&config)?;
//! let mut sim = SimBuilder::new(config, rng).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use engine::Sim;
pub use error::{Anomaly, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use stats::{Statistics, Summary};
