//! Record sorter
//!
//! Optional stable ordering by one record field.

use crate::record::{LogRecord, SortField};

/// Sort records ascending by the given field's text
///
/// With `None` the input comes back unchanged. Comparison is
/// lexicographic over the field's bytes for every field, status and
/// size included: "100" sorts before "20". The sort is stable, so
/// records with equal keys keep their relative order.
pub fn sort_by_field(mut records: Vec<LogRecord>, key: Option<SortField>) -> Vec<LogRecord> {
    if let Some(field) = key {
        records.sort_by(|a, b| a.field(field).cmp(b.field(field)));
    }
    records
}
