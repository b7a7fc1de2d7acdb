use crate::application::report::RunReport;
use crate::error::Result;
use std::io::Write;

/// Writes a run report as CSV, one row per input record.
pub struct RunReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RunReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_report(&mut self, report: &RunReport) -> Result<()> {
        for entry in &report.entries {
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
