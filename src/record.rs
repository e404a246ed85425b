//! Record definitions
//!
//! One `LogRecord` per successfully extracted access-log line.
//!
//! All fields are kept as text. No numeric coercion happens anywhere in
//! the pipeline: original formatting survives verbatim, and anomalous
//! values (a non-numeric size logged by a broken upstream) never panic
//! a run. Sorting consequently compares digits lexicographically, so
//! "100" orders before "20".

use std::str::FromStr;

use crate::error::SiftError;

/// A single extracted access-log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Source address text, unvalidated
    pub ip: String,

    /// Timestamp text in the original bracketed format, unparsed
    pub date: String,

    /// Request method token
    pub method: String,

    /// Request target; may contain spaces and query strings
    pub url: String,

    /// Status code as text
    pub status: String,

    /// Byte count as text
    pub size: String,
}

impl LogRecord {
    /// Get a field's text by sort key
    pub fn field(&self, key: SortField) -> &str {
        match key {
            SortField::Ip => &self.ip,
            SortField::Date => &self.date,
            SortField::Method => &self.method,
            SortField::Url => &self.url,
            SortField::Status => &self.status,
            SortField::Size => &self.size,
        }
    }
}

/// Fields a record sequence can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Ip,
    Date,
    Method,
    Url,
    Status,
    Size,
}

impl SortField {
    /// The field name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Ip => "ip",
            SortField::Date => "date",
            SortField::Method => "method",
            SortField::Url => "url",
            SortField::Status => "status",
            SortField::Size => "size",
        }
    }
}

impl FromStr for SortField {
    type Err = SiftError;

    /// Parse a field name
    ///
    /// Anything outside the six known names is rejected with
    /// [`SiftError::InvalidSortKey`]; there is no silent fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(SortField::Ip),
            "date" => Ok(SortField::Date),
            "method" => Ok(SortField::Method),
            "url" => Ok(SortField::Url),
            "status" => Ok(SortField::Status),
            "size" => Ok(SortField::Size),
            other => Err(SiftError::InvalidSortKey(other.to_string())),
        }
    }
}
