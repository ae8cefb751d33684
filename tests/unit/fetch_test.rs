//! Tests for fetch orchestration and the revision marker

use crate::common::*;
use coursesync::core::ports::FetchSource;
use coursesync::paths;
use coursesync::sync::{FetchOutcome, Fetcher, RevisionMarker};
use std::fs;
use tempfile::TempDir;

fn source(revision: Option<&str>) -> FetchSource {
    FetchSource::new("ivanov", "hw1", revision.map(String::from))
}

#[test]
fn test_fetch_twice_checks_out_once() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("HW/Ivan");
    fs::create_dir_all(&dest).unwrap();
    let vcs = RecordingVcs::new();
    let fetcher = Fetcher::new(&vcs, true);

    assert_eq!(fetcher.fetch(&source(Some("7")), &dest).unwrap(), FetchOutcome::Fetched);
    assert_eq!(fetcher.fetch(&source(Some("7")), &dest).unwrap(), FetchOutcome::UpToDate);

    assert_eq!(vcs.checkout_count(), 1);
    assert_eq!(RevisionMarker::read(&dest).unwrap().revision, "7");
}

#[test]
fn test_new_revision_is_fetched() {
    let temp = TempDir::new().unwrap();
    let vcs = RecordingVcs::new();
    let fetcher = Fetcher::new(&vcs, true);

    fetcher.fetch(&source(Some("7")), temp.path()).unwrap();
    assert_eq!(fetcher.fetch(&source(Some("8")), temp.path()).unwrap(), FetchOutcome::Fetched);

    assert_eq!(vcs.checkout_count(), 2);
    assert_eq!(RevisionMarker::read(temp.path()).unwrap().revision, "8");
}

#[test]
fn test_failed_fetch_is_retried() {
    let temp = TempDir::new().unwrap();
    let failing = RecordingVcs::failing_for("ivanov");

    // a previous run left revision 6
    RevisionMarker::now(&source(Some("6")), "6").write(temp.path()).unwrap();

    assert!(Fetcher::new(&failing, true).fetch(&source(Some("7")), temp.path()).is_err());
    // the stale marker is gone, nothing claims 7 is there
    assert!(RevisionMarker::read(temp.path()).is_none());

    let working = RecordingVcs::new();
    let outcome = Fetcher::new(&working, true).fetch(&source(Some("7")), temp.path()).unwrap();
    assert_eq!(outcome, FetchOutcome::Fetched);
    assert_eq!(working.checkout_count(), 1);
}

#[test]
fn test_without_revision_always_fetches() {
    let temp = TempDir::new().unwrap();
    let vcs = RecordingVcs::new();
    let fetcher = Fetcher::new(&vcs, true);

    fetcher.fetch(&source(None), temp.path()).unwrap();
    fetcher.fetch(&source(None), temp.path()).unwrap();

    assert_eq!(vcs.checkout_count(), 2);
    assert!(!paths::revision_marker(temp.path()).exists());
}

#[test]
fn test_caching_disabled_still_records_marker() {
    let temp = TempDir::new().unwrap();
    let vcs = RecordingVcs::new();
    let fetcher = Fetcher::new(&vcs, false);

    fetcher.fetch(&source(Some("7")), temp.path()).unwrap();
    fetcher.fetch(&source(Some("7")), temp.path()).unwrap();

    assert_eq!(vcs.checkout_count(), 2);
    assert_eq!(RevisionMarker::read(temp.path()).unwrap().revision, "7");
}

#[test]
fn test_failed_uncached_fetch_is_retried() {
    let temp = TempDir::new().unwrap();
    let working = RecordingVcs::new();
    Fetcher::new(&working, true).fetch(&source(Some("7")), temp.path()).unwrap();

    let failing = RecordingVcs::failing_for("ivanov");
    assert!(Fetcher::new(&failing, false).fetch(&source(Some("7")), temp.path()).is_err());
    assert!(RevisionMarker::read(temp.path()).is_none());

    let outcome = Fetcher::new(&working, true).fetch(&source(Some("7")), temp.path()).unwrap();
    assert_eq!(outcome, FetchOutcome::Fetched);
    assert_eq!(working.checkout_count(), 2);
}

#[test]
fn test_uncached_fetch_updates_marker() {
    let temp = TempDir::new().unwrap();
    let vcs = RecordingVcs::new();

    Fetcher::new(&vcs, true).fetch(&source(Some("7")), temp.path()).unwrap();
    Fetcher::new(&vcs, false).fetch(&source(Some("8")), temp.path()).unwrap();

    assert_eq!(RevisionMarker::read(temp.path()).unwrap().revision, "8");
    let outcome = Fetcher::new(&vcs, true).fetch(&source(Some("8")), temp.path()).unwrap();
    assert_eq!(outcome, FetchOutcome::UpToDate);
}

#[test]
fn test_other_path_same_revision_is_fetched() {
    let temp = TempDir::new().unwrap();
    let vcs = RecordingVcs::new();
    let fetcher = Fetcher::new(&vcs, true);
    let moved = FetchSource::new("ivanov", "trunk/hw1", Some("7".to_string()));

    fetcher.fetch(&source(Some("7")), temp.path()).unwrap();
    assert_eq!(fetcher.fetch(&moved, temp.path()).unwrap(), FetchOutcome::Fetched);

    assert_eq!(vcs.checkout_count(), 2);
    assert_eq!(RevisionMarker::read(temp.path()).unwrap().path, "trunk/hw1");
}

#[test]
fn test_marker_without_source_is_ignored() {
    let temp = TempDir::new().unwrap();
    fs::write(
        paths::revision_marker(temp.path()),
        r#"{ "revision": "7", "fetched_at": "2024-01-01T00:00:00Z" }"#,
    )
    .unwrap();
    let vcs = RecordingVcs::new();

    let outcome = Fetcher::new(&vcs, true).fetch(&source(Some("7")), temp.path()).unwrap();

    assert_eq!(outcome, FetchOutcome::Fetched);
}

#[test]
fn test_malformed_marker_is_ignored() {
    let temp = TempDir::new().unwrap();
    fs::write(paths::revision_marker(temp.path()), "not json").unwrap();
    let vcs = RecordingVcs::new();

    let outcome = Fetcher::new(&vcs, true).fetch(&source(Some("7")), temp.path()).unwrap();

    assert_eq!(outcome, FetchOutcome::Fetched);
    assert_eq!(RevisionMarker::read(temp.path()).unwrap().revision, "7");
}
