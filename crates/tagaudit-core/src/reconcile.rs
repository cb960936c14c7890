//! Precedence merge of the two tag sources for one file.

use std::fmt;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::tags::{MergedTagSet, TagMapping};

/// A disagreement between the two tag sources for one file.
///
/// Observational output only: mismatches never block the merge or the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// File the disagreement was found in.
    pub path: PathBuf,
    /// Tag name both sources supplied.
    pub tag: CompactString,
    /// Value read from the embedded metadata.
    pub embedded_value: CompactString,
    /// Value derived from the filename.
    pub name_value: CompactString,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag mismatch for {}: {:?} != {:?} @ {}",
            self.tag,
            self.name_value.as_str(),
            self.embedded_value.as_str(),
            self.path.display()
        )
    }
}

/// Merge both tag sources for one file and collect disagreements.
///
/// For each tag present in both sources with differing values a
/// [`Mismatch`] is recorded. The merged set overlays `from_embedded`
/// with `from_name`, so the name-derived value wins on conflict.
pub fn reconcile(
    path: &Path,
    from_name: &TagMapping,
    from_embedded: &TagMapping,
) -> (MergedTagSet, Vec<Mismatch>) {
    let mut mismatches = Vec::new();
    for (tag, embedded_value) in from_embedded.iter() {
        if let Some(name_value) = from_name.get(tag)
            && name_value != embedded_value
        {
            mismatches.push(Mismatch {
                path: path.to_path_buf(),
                tag: tag.into(),
                embedded_value: embedded_value.into(),
                name_value: name_value.into(),
            });
        }
    }

    (MergedTagSet::merge(from_name, from_embedded), mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let mismatch = Mismatch {
            path: PathBuf::from("/music/Artist X - Title Y.mp3"),
            tag: "title".into(),
            embedded_value: "Title Z".into(),
            name_value: "Title Y".into(),
        };
        let line = mismatch.to_string();
        assert_eq!(
            line,
            "Tag mismatch for title: \"Title Y\" != \"Title Z\" @ /music/Artist X - Title Y.mp3"
        );
    }
}
