//! Embedded-tag extraction from a file's ID3 container.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};

use tagaudit_core::{TagMapping, TaskError};

/// Well-known ID3 text frames and the tag names they map to.
///
/// Listed in priority order: the first frame to supply a value for a
/// name wins (TDRC is preferred over the v2.3 TYER for `date`).
const FRAME_KEYS: &[(&str, &str)] = &[
    ("TIT2", "title"),
    ("TPE1", "artist"),
    ("TALB", "album"),
    ("TPE2", "albumartist"),
    ("TCON", "genre"),
    ("TRCK", "tracknumber"),
    ("TPOS", "discnumber"),
    ("TCOM", "composer"),
    ("TDRC", "date"),
    ("TYER", "date"),
    ("TBPM", "bpm"),
];

/// Read the tag mapping embedded in a file.
///
/// Fails with [`TaskError::MetadataRead`] when the container cannot be
/// parsed (corrupt header, wrong format, no tag at all); the failure is
/// scoped to this one file.
pub fn read_embedded_tags(path: &Path) -> Result<TagMapping, TaskError> {
    let tag = Tag::read_from_path(path).map_err(|err| TaskError::MetadataRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut tags = TagMapping::new();
    for (frame_id, name) in FRAME_KEYS {
        if tags.contains(name) {
            continue;
        }
        if let Some(value) = text_frame(&tag, frame_id) {
            tags.insert(*name, value);
        }
    }
    Ok(tags)
}

/// Best-effort string value of a frame id.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(first_value(s.as_str())),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}

/// ID3v2.4 text frames may hold multiple null-separated values; only the
/// first is kept.
fn first_value(s: &str) -> String {
    s.split('\0').next().unwrap_or_default().to_string()
}
