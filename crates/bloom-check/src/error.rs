//! Error types for the item sources and verdict sinks

use std::io;
use std::path::PathBuf;

use bloom_filter::FilterError;
use thiserror::Error;

/// Errors raised while reading items, building the filter or writing verdicts
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{}: row has no column {}", path.display(), line, column)]
    MalformedRow {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to write verdict")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
