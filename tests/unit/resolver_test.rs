//! Tests for submission resolution

use crate::common::*;
use coursesync::core::ports::LinkStore;
use coursesync::core::services::{Resolution, ResolveOptions, Resolver};

fn forced() -> ResolveOptions {
    ResolveOptions {
        force: true,
        ..ResolveOptions::default()
    }
}

#[test]
fn test_no_location() {
    let sub = submission("1", &["HW"], "ivanov", None);
    let mut resolver = Resolver::new(ResolveOptions::default());

    assert_eq!(resolver.resolve(&sub, &mut MemoryLinkStore::new()), Resolution::NoSubmission);
}

#[test]
fn test_direct_path_wins_over_link() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("hw1", "42", "7")));
    let mut store = MemoryLinkStore::new().with_link("42", "elsewhere");
    let mut resolver = Resolver::new(ResolveOptions::default());

    let resolution = resolver.resolve(&sub, &mut store);

    assert_eq!(
        resolution,
        Resolution::DirectPath {
            path: "hw1".to_string(),
            redundant_link: true,
        }
    );
    // kept unless removal is requested
    assert_eq!(store.link("42").as_deref(), Some("elsewhere"));
}

#[test]
fn test_redundant_link_removed_on_request() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("hw1", "42", "7")));
    let mut store = MemoryLinkStore::new().with_link("42", "elsewhere");
    let mut resolver = Resolver::new(ResolveOptions {
        remove_redundant_links: true,
        ..ResolveOptions::default()
    });

    resolver.resolve(&sub, &mut store);

    assert!(store.links.is_empty());
}

#[test]
fn test_failed_link_removal_keeps_resolution() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("hw1", "42", "7")));
    let mut store = MemoryLinkStore::new().with_link("42", "elsewhere");
    store.read_only = true;
    let mut resolver = Resolver::new(ResolveOptions {
        remove_redundant_links: true,
        ..ResolveOptions::default()
    });

    let resolution = resolver.resolve(&sub, &mut store);

    assert_eq!(resolution.fetch_path(), Some("hw1"));
    assert_eq!(store.links.len(), 1);
}

#[test]
fn test_linked_path() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("", "42", "7")));
    let mut store = MemoryLinkStore::new().with_link("42", "trunk/hw1");
    let mut resolver = Resolver::new(ResolveOptions::default());

    assert_eq!(
        resolver.resolve(&sub, &mut store),
        Resolution::LinkedPath {
            path: "trunk/hw1".to_string()
        }
    );
}

#[test]
fn test_blank_path_is_empty() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("   ", "42", "7")));
    let mut store = MemoryLinkStore::new().with_link("42", "hw1");
    let mut resolver = Resolver::new(ResolveOptions::default());

    assert!(matches!(resolver.resolve(&sub, &mut store), Resolution::LinkedPath { .. }));
}

#[test]
fn test_unresolved_without_force_has_no_side_effects() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("", "42", "7")));
    let mut store = MemoryLinkStore::new();
    let mut resolver = Resolver::new(ResolveOptions::default());

    assert_eq!(resolver.resolve(&sub, &mut store), Resolution::Unresolved);
    assert!(store.links.is_empty());
    assert!(!resolver.is_bulk_fetched("ivanov"));
}

#[test]
fn test_forced_once_per_account() {
    let first = submission("1", &["HW1"], "ivanov", Some(location("", "42", "7")));
    let second = submission("1", &["HW2"], "ivanov", Some(location("", "43", "8")));
    let other = submission("1", &["HW1"], "petrov", Some(location("", "44", "9")));
    let mut store = MemoryLinkStore::new();
    let mut resolver = Resolver::new(forced());

    let r1 = resolver.resolve(&first, &mut store);
    let r2 = resolver.resolve(&second, &mut store);
    let r3 = resolver.resolve(&other, &mut store);

    assert_eq!(r1, Resolution::Forced { already_fetched: false });
    assert!(r1.is_bulk());
    assert_eq!(r1.fetch_path(), Some(""));
    assert_eq!(r2, Resolution::Forced { already_fetched: true });
    assert_eq!(r2.fetch_path(), None);
    assert_eq!(r3, Resolution::Forced { already_fetched: false });
}

#[test]
fn test_bulk_set_is_per_resolver() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("", "42", "7")));
    let mut store = MemoryLinkStore::new();

    let mut first_run = Resolver::new(forced());
    first_run.resolve(&sub, &mut store);

    let mut second_run = Resolver::new(forced());
    assert_eq!(
        second_run.resolve(&sub, &mut store),
        Resolution::Forced { already_fetched: false }
    );
}

#[test]
fn test_empty_review_id_never_uses_links() {
    let sub = submission("1", &["HW"], "ivanov", Some(location("", "", "7")));
    let mut store = MemoryLinkStore::new().with_link("", "hw1");
    let mut resolver = Resolver::new(ResolveOptions::default());

    assert_eq!(resolver.resolve(&sub, &mut store), Resolution::Unresolved);
}
