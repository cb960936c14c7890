//! The filename tag pattern and its validation gate.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::ConfigError;
use crate::tags::TagMapping;

/// A compiled filename pattern whose named capture groups identify tags.
///
/// The pattern is applied to a file's base name only, anchored at the
/// start (an occurrence later in the name does not count as a match).
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a pattern from its textual form.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The textual form of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Names of all named capture groups, in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Check that the pattern's named groups cover every required tag.
    ///
    /// Runs once per invocation, before any task is dispatched. A failure
    /// names the missing groups and the named-group syntax to use.
    pub fn validate(&self, required_tags: &[&str]) -> Result<(), ConfigError> {
        let declared: BTreeSet<&str> = self.group_names().collect();
        let missing: Vec<String> = required_tags
            .iter()
            .filter(|tag| !declared.contains(*tag))
            .map(|tag| (*tag).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingTagGroups { missing })
        }
    }

    /// Derive a tag mapping from a file's base name.
    ///
    /// A non-matching name yields an empty mapping, not an error; named
    /// groups that did not participate in the match are absent.
    pub fn extract(&self, file_name: &str) -> TagMapping {
        let mut tags = TagMapping::new();
        let Some(captures) = self.regex.captures(file_name) else {
            return tags;
        };
        // Match must start at the beginning of the name.
        if captures.get(0).map(|m| m.start()) != Some(0) {
            return tags;
        }
        for name in self.regex.capture_names().flatten() {
            if let Some(value) = captures.name(name) {
                tags.insert(name, value.as_str());
            }
        }
        tags
    }
}
