//! `ck-output` — turning a run into text and files.
//!
//! Two backends are provided:
//!
//! | Writer          | Output                                                   |
//! |-----------------|----------------------------------------------------------|
//! | [`TextWriter`]  | The event log, one line per visible event, then `[avg served not_served]` |
//! | [`CsvWriter`]   | `events.csv` and `summary.csv` in a directory            |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `ck_sim::SimObserver`.  A pair `(A, B)` of writers is
//! itself a writer, and so is `Option<W>`, so several backends can be fed
//! from one run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ck_output::{OutputObserver, ServerLabels, TextWriter};
//!
//! let labels = ServerLabels::from_floor(&sim.floor);
//! let mut obs = OutputObserver::new(TextWriter::new(std::io::stdout().lock()), labels);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{ServerLabels, format_event, format_row, format_summary};
pub use observer::OutputObserver;
pub use row::EventRow;
pub use text::TextWriter;
pub use writer::OutputWriter;
