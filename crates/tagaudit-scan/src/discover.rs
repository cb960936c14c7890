//! Recursive discovery of candidate audio files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use jwalk::{Parallelism, WalkDir};

/// Extension the discovery filter matches, lowercase only.
const AUDIO_EXTENSION: &str = "mp3";

/// Enumerate audio files under each root.
///
/// Enumeration order is not guaranteed. Unreadable entries are reported
/// as warning messages rather than aborting the walk.
pub(crate) fn discover_files(roots: &[PathBuf], threads: usize) -> (Vec<PathBuf>, Vec<String>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for root in roots {
        let parallelism = match threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(root)
            .parallelism(parallelism)
            .skip_hidden(false)
            .follow_links(false);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    warnings.push(err.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if is_audio_file(&path) {
                files.push(path);
            }
        }
    }

    (files, warnings)
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == AUDIO_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_filter_matches_lowercase_extension_only() {
        assert!(is_audio_file(Path::new("/music/song.mp3")));
        assert!(!is_audio_file(Path::new("/music/song.MP3")));
        assert!(!is_audio_file(Path::new("/music/cover.jpg")));
        assert!(!is_audio_file(Path::new("/music/mp3")));
    }
}
