//! Integration tests for the issue store against the builtin catalog.

use dsv_issues::{IssueCatalog, IssueField, IssueFilter, IssueStore};
use dsv_model::{DsvError, NewIssue, Severity};

#[test]
fn builtin_catalog_defaults_apply_for_every_code() {
    // For every registered code, adding without an explicit message yields a
    // record carrying the catalog message and default severity.
    for (code, entry) in IssueCatalog::builtin().iter() {
        let mut store = IssueStore::new();
        store.add(NewIssue::new(code)).expect("registered code");
        let issue = &store.issues()[0];
        assert_eq!(issue.message, entry.message);
        assert_eq!(issue.severity, entry.severity);
    }
}

#[test]
fn unknown_code_against_builtin_catalog_fails() {
    let mut store = IssueStore::new();
    let err = store.add(NewIssue::new("NOT_REGISTERED")).unwrap_err();
    assert!(matches!(err, DsvError::UnknownIssueCode { .. }));
}

#[test]
fn size_tracks_live_state() {
    let mut store = IssueStore::new();
    assert_eq!(store.size(), 0);
    assert!(store.is_empty());
    store
        .add(NewIssue::new("EMPTY_FILE").with_location("/sub-01/func/bold.nii.gz"))
        .unwrap();
    store.add(NewIssue::new("MISSING_SESSION")).unwrap();
    assert_eq!(store.size(), 2);
    assert!(!store.is_empty());
}

#[test]
fn grouping_then_filtering_preserves_member_order() {
    let mut store = IssueStore::new();
    for location in ["/d/one", "/d/two", "/d/three"] {
        store
            .add(NewIssue::new("NOT_INCLUDED").with_location(location))
            .unwrap();
    }
    store.add(NewIssue::new("EMPTY_FILE")).unwrap();

    let groups = store.group_by(IssueField::Code);
    let not_included = &groups[&Some("NOT_INCLUDED".to_string())];
    let locations: Vec<&str> = not_included
        .iter()
        .map(|issue| issue.location.as_deref().unwrap())
        .collect();
    assert_eq!(locations, ["/d/one", "/d/two", "/d/three"]);

    let warnings = not_included.filter(&IssueFilter::severity(Severity::Warning));
    assert_eq!(warnings.size(), 3);
    assert_eq!(
        warnings.code_message("NOT_INCLUDED"),
        IssueCatalog::builtin()
            .resolve("NOT_INCLUDED")
            .map(|entry| entry.message.as_str())
    );
}
