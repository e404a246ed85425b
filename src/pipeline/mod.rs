//! Pipeline Module
//!
//! The orchestrator that sequences extraction, filtering and sorting.
//!
//! ## Responsibilities
//! - Validate the sort key up front
//! - Run extract → filter → sort, each stage consuming the previous
//!   stage's full output
//!
//! The pipeline performs no I/O and holds no state across runs: every
//! call to [`Pipeline::run`] works on an independently supplied text
//! blob and produces an independent record sequence.

mod filter;
mod sort;

pub use filter::filter_status;
pub use sort::sort_by_field;

use crate::config::Config;
use crate::error::Result;
use crate::extract::extract;
use crate::record::{LogRecord, SortField};

/// The record pipeline: extract, then filter, then sort
#[derive(Debug)]
pub struct Pipeline {
    /// Keep only records with this status text
    status_filter: Option<String>,

    /// Sort by this field
    sort_key: Option<SortField>,
}

impl Pipeline {
    /// Build a pipeline from run options
    ///
    /// The sort key is parsed here, so an unrecognized field name fails
    /// the run before any extraction work happens.
    pub fn new(status_filter: Option<&str>, sort_key: Option<&str>) -> Result<Self> {
        let sort_key = sort_key.map(|key| key.parse::<SortField>()).transpose()?;

        Ok(Self {
            status_filter: status_filter.map(str::to_string),
            sort_key,
        })
    }

    /// Build a pipeline from a config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.status_filter.as_deref(), config.sort_key.as_deref())
    }

    /// Run the pipeline over raw log text
    pub fn run(&self, raw: &str) -> Vec<LogRecord> {
        // Step 1: Extract records from matching lines
        let records = extract(raw);
        tracing::debug!("extracted {} records", records.len());

        // Step 2: Filter by status, if requested
        let records = filter_status(records, self.status_filter.as_deref());
        if let Some(status) = &self.status_filter {
            tracing::debug!("{} records left after status == {}", records.len(), status);
        }

        // Step 3: Sort by field, if requested
        sort_by_field(records, self.sort_key)
    }
}

/// Extract, filter and sort in one call
///
/// Convenience wrapper over [`Pipeline::new`] + [`Pipeline::run`].
pub fn run(raw: &str, status_filter: Option<&str>, sort_key: Option<&str>) -> Result<Vec<LogRecord>> {
    Ok(Pipeline::new(status_filter, sort_key)?.run(raw))
}
