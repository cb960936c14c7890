//! The scan coordinator: bounded worker pool, unordered completion,
//! per-task failure isolation.

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use serde::Serialize;

use tagaudit_core::{
    ConfigError, MergedTagSet, Mismatch, ScanConfig, TagPattern, TaskError, reconcile,
};

use crate::discover::discover_files;
use crate::extract::read_embedded_tags;

/// Outcome of one completed file task.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub merged: MergedTagSet,
    pub mismatches: Vec<Mismatch>,
}

/// Outcome of one failed file task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate result of one audit run.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    /// Number of tasks dispatched (completed + failed).
    pub files_scanned: usize,
    pub results: Vec<FileResult>,
    pub failures: Vec<TaskFailure>,
    pub scan_duration: Duration,
}

impl AuditReport {
    /// Total mismatches across all completed files.
    pub fn mismatch_count(&self) -> usize {
        self.results.iter().map(|r| r.mismatches.len()).sum()
    }
}

enum TaskOutcome {
    Completed(FileResult),
    Failed(TaskFailure),
}

/// Coordinates an audit run over a worker pool.
pub struct AuditScanner {
    live_output: bool,
}

impl AuditScanner {
    /// Create a scanner that prints mismatch and error lines as tasks
    /// complete.
    pub fn new() -> Self {
        Self { live_output: true }
    }

    /// Control whether outcome lines are printed during the run.
    pub fn with_live_output(mut self, live_output: bool) -> Self {
        self.live_output = live_output;
        self
    }

    /// Run a full audit over the configured roots.
    ///
    /// The pattern is validated exactly once, before any file is touched.
    /// Each discovered file becomes one task on the pool; a failing task
    /// is logged and discarded while its siblings keep running. Returns
    /// only after every dispatched task reached a terminal state.
    pub fn scan(&self, config: &ScanConfig) -> Result<AuditReport, ConfigError> {
        if config.roots.is_empty() {
            return Err(ConfigError::NoSources);
        }

        let pattern = TagPattern::new(&config.pattern)?;
        pattern.validate(&config.required_tags())?;

        let start = Instant::now();
        let (files, warnings) = discover_files(&config.roots, config.threads);
        if self.live_output {
            for warning in &warnings {
                eprintln!("Warning: {warning}");
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .map_err(|err| ConfigError::WorkerPool {
                message: err.to_string(),
            })?;

        let files_scanned = files.len();
        let (tx, rx) = mpsc::channel();
        for path in files {
            let tx = tx.clone();
            let pattern = pattern.clone();
            pool.spawn(move || {
                // Send only fails if the receiving coordinator is gone.
                let _ = tx.send(run_task(&path, &pattern));
            });
        }
        drop(tx);

        let mut results = Vec::new();
        let mut failures = Vec::new();
        // The channel closes once the last worker drops its sender, so
        // this loop is also the wait-for-all barrier.
        for outcome in rx {
            match outcome {
                TaskOutcome::Completed(result) => {
                    if self.live_output {
                        for mismatch in &result.mismatches {
                            println!("{mismatch}");
                        }
                    }
                    results.push(result);
                }
                TaskOutcome::Failed(failure) => {
                    if self.live_output {
                        eprintln!("Error processing file: {}", failure.message);
                    }
                    failures.push(failure);
                }
            }
        }

        Ok(AuditReport {
            files_scanned,
            results,
            failures,
            scan_duration: start.elapsed(),
        })
    }
}

impl Default for AuditScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute one task, trapping panics at the task boundary so a bug in
/// one file's processing is isolated exactly like an error.
fn run_task(path: &Path, pattern: &TagPattern) -> TaskOutcome {
    run_isolated(path, || process_file(path, pattern))
}

fn run_isolated(
    path: &Path,
    task: impl FnOnce() -> Result<FileResult, TaskError>,
) -> TaskOutcome {
    let outcome = panic::catch_unwind(AssertUnwindSafe(task));
    match outcome {
        Ok(Ok(result)) => TaskOutcome::Completed(result),
        Ok(Err(err)) => TaskOutcome::Failed(TaskFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
        Err(panic) => {
            let err = TaskError::Unexpected {
                path: path.to_path_buf(),
                message: panic_message(&*panic),
            };
            TaskOutcome::Failed(TaskFailure {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    }
}

fn process_file(path: &Path, pattern: &TagPattern) -> Result<FileResult, TaskError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let from_name = pattern.extract(&file_name);
    let from_embedded = read_embedded_tags(path)?;
    let (merged, mismatches) = reconcile(path, &from_name, &from_embedded);

    Ok(FileResult {
        path: path.to_path_buf(),
        merged,
        mismatches,
    })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panicking_task_fails_as_unexpected() {
        let path = Path::new("/music/weird.mp3");
        let outcome = run_isolated(path, || panic!("tag index out of range"));

        match outcome {
            TaskOutcome::Failed(failure) => {
                assert_eq!(failure.path, path);
                assert!(failure.message.contains("/music/weird.mp3"));
                assert!(failure.message.contains("tag index out of range"));
            }
            TaskOutcome::Completed(_) => panic!("panicking task must fail"),
        }
    }

    #[test]
    fn test_erroring_task_keeps_its_error_message() {
        let path = Path::new("/music/broken.mp3");
        let outcome = run_isolated(path, || {
            Err(TaskError::MetadataRead {
                path: path.to_path_buf(),
                message: "corrupt header".to_string(),
            })
        });

        match outcome {
            TaskOutcome::Failed(failure) => {
                assert_eq!(failure.path, path);
                assert!(failure.message.contains("corrupt header"));
            }
            TaskOutcome::Completed(_) => panic!("erroring task must fail"),
        }
    }
}
