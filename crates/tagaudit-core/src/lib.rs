//! Core types for tagaudit.
//!
//! This crate provides the data model shared across the tagaudit
//! ecosystem: tag mappings, the filename pattern with its validation
//! gate, the reconciliation algorithm, and the error taxonomy.

mod config;
mod error;
mod pattern;
mod reconcile;
mod tags;

pub use config::{DEFAULT_PATTERN, REQUIRED_TAGS, ScanConfig, ScanConfigBuilder};
pub use error::{ConfigError, TaskError};
pub use pattern::TagPattern;
pub use reconcile::{Mismatch, reconcile};
pub use tags::{MergedTagSet, TagMapping};
