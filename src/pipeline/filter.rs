//! Record filter
//!
//! Optional equality selection on the status field.

use crate::record::LogRecord;

/// Keep records whose status equals `status` exactly
///
/// With `None` the input comes back unchanged. Comparison is plain text
/// equality, never numeric, and relative order is preserved. An empty
/// result is a valid outcome, not an error.
pub fn filter_status(records: Vec<LogRecord>, status: Option<&str>) -> Vec<LogRecord> {
    match status {
        Some(wanted) => records
            .into_iter()
            .filter(|record| record.status == wanted)
            .collect(),
        None => records,
    }
}
