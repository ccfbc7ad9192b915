//! Verdict sink writing `<item>,<verdict>` lines

use std::io::Write;

use crate::error::CheckError;
use crate::ports::{Verdict, VerdictSink};

/// Writes one `item,verdict` line per checked item
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> VerdictSink for LineSink<W> {
    fn record(&mut self, item: &str, verdict: Verdict) -> Result<(), CheckError> {
        writeln!(self.writer, "{},{}", item, verdict)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CheckError> {
        self.writer.flush()?;
        Ok(())
    }
}
