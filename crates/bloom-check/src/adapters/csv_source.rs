//! Item source reading one column of a comma-separated file
//!
//! Rows are parsed with the `csv` crate, so quoted fields may hold commas
//! and doubled quotes. Rows may have differing lengths. Fields are trimmed.
//! Rows whose selected field matches a header name are skipped wherever
//! they appear, as are blank rows.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::CheckError;
use crate::ports::ItemSource;

/// Header names skipped by default
pub const DEFAULT_HEADERS: [&str; 4] = ["Email", "E-mail", "email", "e-mail"];

/// Reads the items in column `column` of a CSV stream, one row at a time
pub struct CsvColumnSource<R> {
    reader: Reader<R>,
    record: StringRecord,
    path: PathBuf,
    column: usize,
    headers: Vec<String>,
    items_read: usize,
}

impl CsvColumnSource<File> {
    /// Open `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file, path))
    }
}

impl<R: Read> CsvColumnSource<R> {
    /// Wrap an already open reader; `path` is used in error messages
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        Self {
            reader,
            record: StringRecord::new(),
            path: path.into(),
            column: 0,
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            items_read: 0,
        }
    }

    /// Select the zero-based column to read
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Replace the header names to skip
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    fn is_header(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }
}

impl<R: Read> ItemSource for CsvColumnSource<R> {
    fn next_item(&mut self) -> Result<Option<String>, CheckError> {
        loop {
            let more = self
                .reader
                .read_record(&mut self.record)
                .map_err(|source| CheckError::Parse {
                    path: self.path.clone(),
                    source,
                })?;
            if !more {
                debug!(path = %self.path.display(), items = self.items_read, "Read items");
                return Ok(None);
            }

            if self.record.iter().all(str::is_empty) {
                continue;
            }

            let line = self.record.position().map_or(0, |p| p.line() as usize);
            let field = self
                .record
                .get(self.column)
                .ok_or_else(|| CheckError::MalformedRow {
                    path: self.path.clone(),
                    line,
                    column: self.column,
                })?;

            if self.is_header(field) {
                debug!(path = %self.path.display(), line, header = field, "Skipping header row");
                continue;
            }

            let item = field.to_string();
            self.items_read += 1;
            return Ok(Some(item));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<String>, CheckError> {
        CsvColumnSource::from_reader(Cursor::new(input.to_string()), "test.csv").read_items()
    }

    #[test]
    fn test_reads_first_column_and_skips_header() {
        let items = read("Email,Name\na@example.com,A\nb@example.com,B\n").unwrap();
        assert_eq!(items, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_skips_every_known_header_anywhere() {
        let items = read("e-mail\na@example.com\nE-mail\nemail\nb@example.com\nEmail").unwrap();
        assert_eq!(items, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_skips_blank_lines_and_handles_crlf() {
        let items = read("a@example.com\r\n\r\n   \nb@example.com\r\n").unwrap();
        assert_eq!(items, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_strips_quotes_and_whitespace() {
        let items = read("\"a@example.com\" ,x\n  b@example.com\n\"Email\"\n").unwrap();
        assert_eq!(items, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_quoted_commas_and_escaped_quotes() {
        let items = read("\"Doe, John\",x\n\"say \"\"hi\"\"@x.com\",y\n").unwrap();
        assert_eq!(
            items,
            vec!["Doe, John", "say \"hi\"@x.com"],
            "Quoted fields should be unescaped, not split"
        );
    }

    #[test]
    fn test_quoted_comma_in_earlier_column() {
        let items = CsvColumnSource::from_reader(
            Cursor::new("\"Doe, John\",john@example.com\n"),
            "t.csv",
        )
        .with_column(1)
        .read_items()
        .unwrap();
        assert_eq!(items, vec!["john@example.com"]);
    }

    #[test]
    fn test_selected_column() {
        let items = CsvColumnSource::from_reader(Cursor::new("Name,Email\nA,a@example.com\n"), "t.csv")
            .with_column(1)
            .read_items()
            .unwrap();
        assert_eq!(items, vec!["a@example.com"]);
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let err = CsvColumnSource::from_reader(Cursor::new("a,b\nc\n"), "t.csv")
            .with_column(1)
            .read_items()
            .unwrap_err();

        assert!(
            matches!(err, CheckError::MalformedRow { line: 2, column: 1, .. }),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_items_stream_before_a_malformed_row() {
        let mut source = CsvColumnSource::from_reader(Cursor::new("a,1\nb,2\nc\n"), "t.csv")
            .with_column(1);

        assert_eq!(source.next_item().unwrap().as_deref(), Some("1"));
        assert_eq!(source.next_item().unwrap().as_deref(), Some("2"));
        assert!(matches!(
            source.next_item(),
            Err(CheckError::MalformedRow { line: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let result = CsvColumnSource::from_reader(Cursor::new(vec![b'a', 0xff, b'\n']), "t.csv")
            .read_items();
        assert!(matches!(result, Err(CheckError::Parse { .. })));
    }

    #[test]
    fn test_custom_headers() {
        let items = CsvColumnSource::from_reader(Cursor::new("user\nEmail\n"), "t.csv")
            .with_headers(["user"])
            .read_items()
            .unwrap();
        assert_eq!(items, vec!["Email"]);
    }

    #[test]
    fn test_open_missing_file() {
        let result = CsvColumnSource::open("/definitely/not/here.csv");
        assert!(matches!(result, Err(CheckError::Read { .. })));
    }
}
