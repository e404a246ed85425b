//! Publish Module
//!
//! Pushes the produced CSV through an external version-control step.
//!
//! Publishing sits behind a narrow trait so the rest of the tool stays
//! unit-testable without git installed. A publish failure maps to
//! [`SiftError::Publish`](crate::SiftError::Publish) and leaves the
//! already-produced file untouched; callers decide whether to treat it
//! as fatal (the CLI does not).

mod git;

pub use git::GitPublisher;

use std::path::Path;

use crate::error::Result;

/// A destination that can publish the produced file
pub trait Publisher {
    /// Publish the file at `path`
    fn publish(&self, path: &Path) -> Result<()>;
}
