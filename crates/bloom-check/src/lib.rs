//! # Bloom Check
//!
//! Builds a Bloom filter from one column of a CSV file and reports, for each
//! item of a second file, whether it is probably in the first.
//!
//! - **Ports** (`ports.rs`): `ItemSource`, `VerdictSink`, `Verdict`
//! - **Adapters** (`adapters/`): `CsvColumnSource`, `LineSink`
//! - **Runner** (`runner.rs`): build-then-check flow
//!
//! ```
//! use bloom_check::{run, Verdict};
//! use bloom_filter::NoOpMetrics;
//!
//! let mut members = vec!["a@example.com".to_string()];
//! let mut queries = vec!["a@example.com".to_string(), "b@example.com".to_string()];
//! let mut verdicts: Vec<(String, Verdict)> = Vec::new();
//!
//! run(&mut members, &mut queries, &mut verdicts, 1e-7, &NoOpMetrics).unwrap();
//! assert_eq!(verdicts[0].1, Verdict::ProbablyPresent);
//! assert_eq!(verdicts[1].1, Verdict::NotPresent);
//! ```

pub mod adapters;
pub mod error;
pub mod ports;
pub mod runner;

pub use adapters::{CsvColumnSource, LineSink, DEFAULT_HEADERS};
pub use error::CheckError;
pub use ports::{ItemSource, Verdict, VerdictSink};
pub use runner::{build_filter, check_items, run, CheckSummary};
