//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default filename pattern: `Artist - Title.mp3`.
pub const DEFAULT_PATTERN: &str = r"(?P<artist>.*) - (?P<title>.*).mp3";

/// Tags every pattern must expose as named capture groups.
pub const REQUIRED_TAGS: [&str; 2] = ["title", "artist"];

/// Configuration for an audit run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root directories to scan.
    pub roots: Vec<PathBuf>,

    /// Pattern used to extract tags from filenames.
    #[builder(default = "default_pattern()")]
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Tags the pattern must declare as named groups.
    #[builder(default = "default_required_tags()")]
    #[serde(default = "default_required_tags")]
    pub required_tags: Vec<String>,

    /// Number of worker threads (0 = available parallelism).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,

    /// Cache directory, accepted for CLI compatibility but not consumed.
    #[builder(default)]
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_required_tags() -> Vec<String> {
    REQUIRED_TAGS.map(String::from).to_vec()
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.roots {
            Some(roots) if roots.is_empty() => {
                Err("At least one source root is required".to_string())
            }
            None => Err("Source roots are required".to_string()),
            _ => Ok(()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config with defaults for the given roots.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            pattern: default_pattern(),
            required_tags: default_required_tags(),
            threads: 0,
            cache_dir: None,
        }
    }

    /// Required tags as borrowed strings, for the validator.
    pub fn required_tags(&self) -> Vec<&str> {
        self.required_tags.iter().map(String::as_str).collect()
    }
}
