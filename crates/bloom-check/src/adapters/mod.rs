//! Adapters Layer (Driven Adapters)
//!
//! - `CsvColumnSource` - Reads one column of a CSV file
//! - `LineSink` - Writes `item,verdict` lines to any writer

pub mod console_sink;
pub mod csv_source;

pub use console_sink::LineSink;
pub use csv_source::{CsvColumnSource, DEFAULT_HEADERS};
