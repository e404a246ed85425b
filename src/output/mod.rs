//! Output Module
//!
//! Writes the final record sequence as a CSV file.

mod csv;

pub use csv::{save_csv, write_csv, CSV_HEADER};
