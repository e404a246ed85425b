//! Configuration for logsift
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a logsift run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input / Output Paths
    // -------------------------------------------------------------------------
    /// Access log to read
    pub log_path: PathBuf,

    /// CSV file to produce
    pub csv_path: PathBuf,

    // -------------------------------------------------------------------------
    // Pipeline Options
    // -------------------------------------------------------------------------
    /// Keep only records with exactly this status text (e.g. "200")
    pub status_filter: Option<String>,

    /// Field name to sort by (ip, date, method, url, status, size)
    pub sort_key: Option<String>,

    // -------------------------------------------------------------------------
    // Publish Options
    // -------------------------------------------------------------------------
    /// Stage, commit and push the CSV after writing it
    pub push: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("nginx.log"),
            csv_path: PathBuf::from("nginx_logs.csv"),
            status_filter: None,
            sort_key: None,
            push: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the access log to read
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    /// Set the CSV file to produce
    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.csv_path = path.into();
        self
    }

    /// Keep only records with this exact status text
    pub fn status_filter(mut self, status: impl Into<String>) -> Self {
        self.config.status_filter = Some(status.into());
        self
    }

    /// Sort by this field name (validated when the pipeline is built)
    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.config.sort_key = Some(key.into());
        self
    }

    /// Publish the CSV via git after writing it
    pub fn push(mut self, push: bool) -> Self {
        self.config.push = push;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
