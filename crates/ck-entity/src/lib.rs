//! `ck-entity` — the entity model driven by the simulation engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`customer`]  | `Customer`, `generate_customers`                                |
//! | [`server`]    | `Server`, `ServerKind`, `LineId`                                |
//! | [`line`]      | `WaitLine` (customers ordered by arrival time, then id)         |
//! | [`floor`]     | `ServerFloor` — every server and every line, plus transitions   |
//! | [`routing`]   | `choose_server` → `Route` (typical and greedy policies)         |
//! | [`error`]     | `RoutingError`                                                  |
//!
//! # Shared self-checkout line
//!
//! Human servers each own a line.  Self-checkout counters all point at one
//! shared line, so "joining self-checkout" means joining that single line and
//! any counter that frees up serves its front.  `ServerFloor` owns the lines
//! and servers refer to them by `LineId`, which keeps the sharing explicit
//! instead of hiding it in global state.

pub mod customer;
pub mod error;
pub mod floor;
pub mod line;
pub mod routing;
pub mod server;


pub use customer::{Customer, generate_customers};
pub use error::{RoutingError, RoutingResult};
pub use floor::{OutOfTurn, ServerFloor, ServiceStart};
pub use line::WaitLine;
pub use routing::{Route, choose_server};
pub use server::{LineId, Server, ServerKind};
