//! CSV sink — writes the record store to a two-column table.
//!
//! Output layout:
//!
//! ```text
//! Timestamp,Data
//! 2025-03-07 09:05:03,temp=21.5
//! 2025-03-07 09:05:04,"a,b"
//! ```
//!
//! Payloads are written as-is. Fields containing a comma, a double quote or a
//! line break are quoted and inner quotes doubled.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LoggerError, Result};
use crate::types::Record;

/// Header row of the output file
pub const CSV_HEADER: &str = "Timestamp,Data";

/// Writes records to a CSV file
pub struct CsvSink;

impl CsvSink {
    /// Write `records` to `path`, replacing any existing file.
    ///
    /// An empty record list produces a header-only file. Returns the number
    /// of data rows written.
    pub fn write<'a, I>(records: I, path: &Path) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let export_err = |source| LoggerError::Export {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(export_err)?;
        let mut writer = BufWriter::new(file);
        let rows = Self::write_to(records, &mut writer).map_err(export_err)?;
        writer.flush().map_err(export_err)?;

        tracing::info!(path = %path.display(), rows, "CsvSink wrote file");
        Ok(rows)
    }

    /// Serialize `records` to any writer
    pub fn write_to<'a, I, W>(records: I, writer: &mut W) -> std::io::Result<usize>
    where
        I: IntoIterator<Item = &'a Record>,
        W: Write,
    {
        writeln!(writer, "{}", CSV_HEADER)?;
        let mut rows = 0;
        for record in records {
            writeln!(
                writer,
                "{},{}",
                record.timestamp_string(),
                quote_field(record.payload())
            )?;
            rows += 1;
        }
        Ok(rows)
    }
}

/// Quote a field only when it contains a delimiter, quote or line break
fn quote_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(s: u32, payload: &str) -> Record {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, s)
            .unwrap();
        Record::new(ts, payload)
    }

    fn render(records: &[Record]) -> String {
        let mut out = Vec::new();
        CsvSink::write_to(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(render(&[]), "Timestamp,Data\n");
    }

    #[test]
    fn test_rows_in_order() {
        let out = render(&[record(1, "A"), record(2, "B")]);
        assert_eq!(
            out,
            "Timestamp,Data\n2025-03-07 09:05:01,A\n2025-03-07 09:05:02,B\n"
        );
    }

    #[test]
    fn test_quoting() {
        assert_eq!(quote_field("plain"), "plain");
        assert_eq!(quote_field(""), "");
        assert_eq!(quote_field("a,b"), "\"a,b\"");
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field("cr\rhere"), "\"cr\rhere\"");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serial_data.csv");
        std::fs::write(&path, "old contents that are much longer than the new ones\n").unwrap();

        let rows = CsvSink::write(&[record(3, "x=1")], &path).unwrap();
        assert_eq!(rows, 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Timestamp,Data\n2025-03-07 09:05:03,x=1\n"
        );
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("serial_data.csv");

        let err = CsvSink::write(&[record(0, "A")], &path).unwrap_err();
        assert!(matches!(err, LoggerError::Export { .. }));
        assert!(err.to_string().contains("serial_data.csv"));
    }
}
