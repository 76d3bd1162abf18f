//! `OutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ck_event::Event;
use ck_sim::{SimObserver, Summary};

use crate::writer::OutputWriter;
use crate::{EventRow, OutputError, OutputResult, ServerLabels};

/// A [`SimObserver`] that writes every visible event and the final summary
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    labels:     ServerLabels,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    /// Create an observer backed by `writer`, labelling servers from `labels`.
    pub fn new(writer: W, labels: ServerLabels) -> Self {
        Self { writer, labels, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_event(&mut self, event: &Event) {
        let result = match EventRow::from_event(event, &self.labels) {
            Ok(Some(row)) => self.writer.write_event(&row),
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };
        self.store_err(result);
    }

    fn on_sim_end(&mut self, summary: &Summary) {
        let result = self.writer.write_summary(summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
