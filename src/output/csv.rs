//! CSV export
//!
//! Fixed six-column tabular output, one record per row, fields written
//! verbatim as text.
//!
//! ## File Format
//!
//! ```text
//! IP,Date,Method,URL,Status,Size
//! 127.0.0.1,10/Oct/2023:13:55:36 -0700,GET,/index.html,200,512
//! ```
//!
//! A field containing a comma, quote or line break is wrapped in double
//! quotes with inner quotes doubled. Rows end in `\n`.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::LogRecord;

/// Column header row, in output order
pub const CSV_HEADER: [&str; 6] = ["IP", "Date", "Method", "URL", "Status", "Size"];

/// Write header and records as CSV to any writer
pub fn write_csv<W: Write>(writer: &mut W, records: &[LogRecord]) -> Result<()> {
    write_row(writer, CSV_HEADER)?;

    for record in records {
        write_row(
            writer,
            [
                record.ip.as_str(),
                record.date.as_str(),
                record.method.as_str(),
                record.url.as_str(),
                record.status.as_str(),
                record.size.as_str(),
            ],
        )?;
    }

    Ok(())
}

/// Write records to a CSV file, replacing any existing file
pub fn save_csv(path: &Path, records: &[LogRecord]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records)?;
    writer.flush()?;

    Ok(())
}

/// Write one row of six fields
fn write_row<W: Write>(writer: &mut W, fields: [&str; 6]) -> Result<()> {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            writer.write_all(b",")?;
        }
        write_field(writer, field)?;
    }
    writer.write_all(b"\n")?;

    Ok(())
}

/// Write one field, quoted when it contains a delimiter
fn write_field<W: Write>(writer: &mut W, field: &str) -> Result<()> {
    if needs_quoting(field) {
        writer.write_all(b"\"")?;
        writer.write_all(field.replace('"', "\"\"").as_bytes())?;
        writer.write_all(b"\"")?;
    } else {
        writer.write_all(field.as_bytes())?;
    }

    Ok(())
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'))
}
