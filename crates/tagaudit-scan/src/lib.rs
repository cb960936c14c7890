//! File discovery and the concurrent audit coordinator for tagaudit.
//!
//! The coordinator validates the filename pattern once, discovers MP3
//! files under the configured roots, then dispatches one reconciliation
//! task per file to a bounded worker pool. A failure in one file's task
//! is logged and never affects sibling tasks.
//!
//! ```rust,ignore
//! use tagaudit_core::ScanConfig;
//! use tagaudit_scan::AuditScanner;
//!
//! let config = ScanConfig::new(["/music"]);
//! let report = AuditScanner::new().scan(&config)?;
//!
//! println!("{} file(s), {} mismatch(es)", report.files_scanned, report.mismatch_count());
//! ```

mod coordinator;
mod discover;
mod extract;

pub use coordinator::{AuditReport, AuditScanner, FileResult, TaskFailure};
pub use extract::read_embedded_tags;
