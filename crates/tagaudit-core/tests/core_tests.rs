use std::path::Path;

use tagaudit_core::{
    ConfigError, DEFAULT_PATTERN, MergedTagSet, REQUIRED_TAGS, TagMapping, TagPattern, reconcile,
};

#[test]
fn test_default_pattern_passes_validation() {
    let pattern = TagPattern::new(DEFAULT_PATTERN).unwrap();
    pattern.validate(&REQUIRED_TAGS).unwrap();
}

#[test]
fn test_validation_reports_all_missing_groups() {
    let pattern = TagPattern::new(r"(.*) - (.*).mp3").unwrap();
    let err = pattern.validate(&REQUIRED_TAGS).unwrap_err();

    match err {
        ConfigError::MissingTagGroups { missing } => {
            assert_eq!(missing, vec!["title".to_string(), "artist".to_string()]);
        }
        other => panic!("expected MissingTagGroups, got {other:?}"),
    }
}

#[test]
fn test_validation_reports_single_missing_group() {
    let pattern = TagPattern::new(r"(?P<artist>.*) - (.*).mp3").unwrap();
    let err = pattern.validate(&REQUIRED_TAGS).unwrap_err();

    match err {
        ConfigError::MissingTagGroups { missing } => {
            assert_eq!(missing, vec!["title".to_string()]);
        }
        other => panic!("expected MissingTagGroups, got {other:?}"),
    }
}

#[test]
fn test_validation_allows_extra_groups() {
    let pattern =
        TagPattern::new(r"(?P<tracknumber>\d+) (?P<artist>.*) - (?P<title>.*).mp3").unwrap();
    pattern.validate(&REQUIRED_TAGS).unwrap();
}

#[test]
fn test_invalid_pattern_is_a_config_error() {
    let err = TagPattern::new(r"(?P<artist>.*").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}

#[test]
fn test_extract_from_matching_name() {
    let pattern = TagPattern::new(DEFAULT_PATTERN).unwrap();
    let tags = pattern.extract("Artist X - Title Y.mp3");

    assert_eq!(tags.get("artist"), Some("Artist X"));
    assert_eq!(tags.get("title"), Some("Title Y"));
    assert_eq!(tags.len(), 2);
}

#[test]
fn test_extract_from_non_matching_name_is_empty() {
    let pattern = TagPattern::new(DEFAULT_PATTERN).unwrap();
    let tags = pattern.extract("no separator here.mp3");
    assert!(tags.is_empty());
}

#[test]
fn test_reconcile_agreeing_sources_merge_to_union() {
    let from_name: TagMapping = [("artist", "Artist X"), ("title", "Title Y")]
        .into_iter()
        .collect();
    let from_embedded: TagMapping = [("title", "Title Y"), ("album", "Album A")]
        .into_iter()
        .collect();

    let (merged, mismatches) =
        reconcile(Path::new("/music/a.mp3"), &from_name, &from_embedded);

    assert!(mismatches.is_empty());
    let expected: MergedTagSet = [
        ("title", "Title Y"),
        ("album", "Album A"),
        ("artist", "Artist X"),
    ]
    .into_iter()
    .collect();
    assert_eq!(merged, expected);
}

#[test]
fn test_reconcile_emits_one_mismatch_per_differing_tag() {
    let from_name: TagMapping = [("artist", "Name A"), ("title", "Name T")]
        .into_iter()
        .collect();
    let from_embedded: TagMapping = [("artist", "Tag A"), ("title", "Tag T")]
        .into_iter()
        .collect();

    let (merged, mismatches) =
        reconcile(Path::new("/music/b.mp3"), &from_name, &from_embedded);

    assert_eq!(mismatches.len(), 2);
    // Name wins on every conflict.
    assert_eq!(merged.get("artist"), Some("Name A"));
    assert_eq!(merged.get("title"), Some("Name T"));
}

#[test]
fn test_reconcile_empty_name_side_passes_embedded_through() {
    let from_name = TagMapping::new();
    let from_embedded: TagMapping = [("title", "Title Z"), ("artist", "Artist Z")]
        .into_iter()
        .collect();

    let (merged, mismatches) =
        reconcile(Path::new("/music/c.mp3"), &from_name, &from_embedded);

    assert!(mismatches.is_empty());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.get("title"), Some("Title Z"));
    assert_eq!(merged.get("artist"), Some("Artist Z"));
}

#[test]
fn test_reconcile_worked_example() {
    // Pattern `(?P<artist>.*) - (?P<title>.*).mp3` applied to
    // "Artist X - Title Y.mp3" with embedded {title: "Title Z"}.
    let pattern = TagPattern::new(DEFAULT_PATTERN).unwrap();
    let from_name = pattern.extract("Artist X - Title Y.mp3");
    let from_embedded: TagMapping = [("title", "Title Z")].into_iter().collect();

    let (merged, mismatches) = reconcile(
        Path::new("/music/Artist X - Title Y.mp3"),
        &from_name,
        &from_embedded,
    );

    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].tag, "title");
    assert_eq!(mismatches[0].name_value, "Title Y");
    assert_eq!(mismatches[0].embedded_value, "Title Z");

    assert_eq!(merged.get("artist"), Some("Artist X"));
    assert_eq!(merged.get("title"), Some("Title Y"));
    assert_eq!(merged.len(), 2);
}
