//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::info;

use ck_sim::Summary;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time", "customer", "greedy", "action", "server_kind", "server"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["average_wait", "served", "not_served"])?;

        info!("writing CSV output to {}", dir.display());
        Ok(Self {
            events,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let (kind, server) = match row.server {
            Some((kind, id)) => (kind.label().to_owned(), id.to_string()),
            None => (String::new(), String::new()),
        };
        self.events.write_record(&[
            row.time.to_string(),
            row.customer.to_string(),
            (row.greedy as u8).to_string(),
            row.action.name().to_owned(),
            kind,
            server,
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &Summary) -> OutputResult<()> {
        self.summary.write_record(&[
            summary.average_wait.to_string(),
            summary.served.to_string(),
            summary.not_served.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
