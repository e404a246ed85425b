//! Git publisher
//!
//! Stages, commits and pushes the produced file with the system `git`,
//! stopping at the first failing step.

use std::path::Path;
use std::process::Command;

use chrono::Utc;

use crate::error::{Result, SiftError};

use super::Publisher;

/// Publishes by running `git add`, `git commit`, `git push`
#[derive(Debug, Default)]
pub struct GitPublisher;

impl GitPublisher {
    pub fn new() -> Self {
        Self
    }

    /// Run one git step
    ///
    /// Maps both spawn failures (git not installed) and non-zero exits
    /// to a publish error carrying the step name and stderr.
    fn git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| SiftError::Publish(format!("git {}: {}", args[0], e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SiftError::Publish(format!(
                "git {} exited with {}: {}",
                args[0],
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, path: &Path) -> Result<()> {
        let file = path.to_string_lossy();
        let message = format!("Updated logs: {}", Utc::now().to_rfc3339());

        self.git(&["add", file.as_ref()])?;
        self.git(&["commit", "-m", &message])?;
        self.git(&["push"])?;

        tracing::info!("Published {} via git", file);
        Ok(())
    }
}
