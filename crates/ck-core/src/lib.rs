//! `ck-core` — foundational types for the checkout simulator.
//!
//! This crate is a dependency of every other `ck-*` crate.  It has no `ck-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `ServerId`                                  |
//! | [`time`]        | `SimTime` (totally ordered `f64` instant)                 |
//! | [`rng`]         | `RandomSource` trait, `SimRandom`, `ScriptedRandom`       |
//! | [`config`]      | `CheckoutConfig` (the ten run parameters)                 |
//! | [`error`]       | `CkError`, `CkResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CheckoutConfig;
pub use error::{CkError, CkResult};
pub use ids::{CustomerId, ServerId};
pub use rng::{RandomSource, ScriptedRandom, SimRandom, Stream};
pub use time::SimTime;
