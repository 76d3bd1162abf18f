//! Plain-text event log.

use std::io::Write;

use ck_sim::Summary;

use crate::format::{format_row, format_summary};
use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult};

/// Writes the event log line by line to any `Write` sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        writeln!(self.out, "{}", format_row(row))?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &Summary) -> OutputResult<()> {
        writeln!(self.out, "{}", format_summary(summary))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
