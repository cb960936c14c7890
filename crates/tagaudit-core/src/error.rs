//! Error types for audit runs.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration errors, reported before any task is dispatched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tag pattern is not a valid regular expression.
    #[error("Invalid tag pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The tag pattern compiles but lacks required named groups.
    #[error(
        "Pattern is missing required named group(s): {}. \
         Declare each required tag as a named capture group, e.g. (?P<title>...)",
        .missing.join(", ")
    )]
    MissingTagGroups { missing: Vec<String> },

    /// No source roots were given.
    #[error("At least one source root is required")]
    NoSources,

    /// The worker pool could not be constructed.
    #[error("Failed to build worker pool: {message}")]
    WorkerPool { message: String },
}

/// Per-file failures, isolated to the task that produced them.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The file's embedded metadata container could not be parsed.
    #[error("{path}: cannot read embedded tags: {message}")]
    MetadataRead { path: PathBuf, message: String },

    /// Any other failure raised while processing one file.
    #[error("{path}: {message}")]
    Unexpected { path: PathBuf, message: String },
}

impl TaskError {
    /// Path of the file whose task failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MetadataRead { path, .. } | Self::Unexpected { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_groups_message_names_groups_and_syntax() {
        let err = ConfigError::MissingTagGroups {
            missing: vec!["title".to_string(), "artist".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("title, artist"));
        assert!(msg.contains("(?P<title>...)"));
    }

    #[test]
    fn test_task_error_path() {
        let err = TaskError::MetadataRead {
            path: PathBuf::from("/music/a.mp3"),
            message: "no tag".to_string(),
        };
        assert_eq!(err.path(), std::path::Path::new("/music/a.mp3"));
        assert!(err.to_string().contains("a.mp3"));
    }
}
