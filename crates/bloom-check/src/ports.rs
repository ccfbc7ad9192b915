//! Ports Layer
//!
//! Traits for the two collaborators around the filter:
//! - `ItemSource` (driven) - yields the strings to add or check
//! - `VerdictSink` (driven) - receives one verdict per checked item

use std::fmt;

use crate::error::CheckError;

/// Answer for one checked item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every bit for the item was set; it may have been added
    ProbablyPresent,
    /// At least one bit was clear; the item was never added
    NotPresent,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::ProbablyPresent => "Probably in the DB",
            Verdict::NotPresent => "Not in the DB",
        }
    }
}

impl From<bool> for Verdict {
    fn from(contains: bool) -> Self {
        if contains {
            Verdict::ProbablyPresent
        } else {
            Verdict::NotPresent
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of items (Driven Port)
///
/// Header rows and any other non-item rows are the source's business;
/// everything returned is treated as an item.
pub trait ItemSource {
    /// Next item, or `None` once the source is exhausted
    fn next_item(&mut self) -> Result<Option<String>, CheckError>;

    /// Drain every remaining item, in order
    fn read_items(&mut self) -> Result<Vec<String>, CheckError> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item()? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Destination for verdicts (Driven Port)
pub trait VerdictSink {
    /// Record the verdict for one item
    fn record(&mut self, item: &str, verdict: Verdict) -> Result<(), CheckError>;

    /// Flush anything buffered
    fn finish(&mut self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl ItemSource for Vec<String> {
    fn next_item(&mut self) -> Result<Option<String>, CheckError> {
        Ok((!self.is_empty()).then(|| self.remove(0)))
    }

    fn read_items(&mut self) -> Result<Vec<String>, CheckError> {
        Ok(std::mem::take(self))
    }
}

impl VerdictSink for Vec<(String, Verdict)> {
    fn record(&mut self, item: &str, verdict: Verdict) -> Result<(), CheckError> {
        self.push((item.to_string(), verdict));
        Ok(())
    }
}
