//! The `OutputWriter` trait implemented by all backend writers.

use ck_sim::Summary;

use crate::{EventRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`OutputObserver::take_error`](crate::OutputObserver::take_error).
pub trait OutputWriter {
    /// Write one visible event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write the end-of-run summary.
    fn write_summary(&mut self, summary: &Summary) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Both writers receive every call; the first error wins.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let a = self.0.write_event(row);
        let b = self.1.write_event(row);
        a.and(b)
    }

    fn write_summary(&mut self, summary: &Summary) -> OutputResult<()> {
        let a = self.0.write_summary(summary);
        let b = self.1.write_summary(summary);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}

/// An absent writer accepts everything.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_event(row))
    }

    fn write_summary(&mut self, summary: &Summary) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_summary(summary))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.finish())
    }
}
