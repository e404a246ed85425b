//! # logsift
//!
//! Turns nginx-style access logs into tabular CSV data:
//! - Fixed-grammar line extraction (malformed lines are skipped)
//! - Optional equality filter on the status field
//! - Optional stable lexicographic sort on any record field
//! - CSV export with a fixed six-column header
//! - Optional git publishing of the produced file
//!
//! ## Pipeline Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Raw Log Text                          │
//! │                  (one request per line)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Extractor                              │
//! │         (line grammar → LogRecord, misses dropped)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────▼────────────┐
//!          │     Filter (status)     │
//!          └────────────┬────────────┘
//!                       │
//!          ┌────────────▼────────────┐
//!          │    Sorter (by field)    │
//!          └────────────┬────────────┘
//!                       │
//!                       ▼
//!               ┌─────────────┐      ┌─────────────┐
//!               │  CSV File   │─────▶│ Git Publish │
//!               │  (output)   │      │ (optional)  │
//!               └─────────────┘      └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod extract;
pub mod pipeline;
pub mod output;
pub mod publish;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SiftError};
pub use config::Config;
pub use record::{LogRecord, SortField};
pub use extract::extract;
pub use pipeline::Pipeline;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logsift
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
