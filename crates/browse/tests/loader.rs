#![forbid(unsafe_code)]

use metascan_browse::{DetailLoader, LoadPhase};

#[test]
fn open_resolve_close_lifecycle() {
    let mut loader: DetailLoader<Vec<u32>> = DetailLoader::new();
    assert_eq!(loader.phase(), LoadPhase::Idle);
    assert!(!loader.is_open());

    loader.open("a");
    assert_eq!(loader.phase(), LoadPhase::Loading);
    assert!(loader.is_open());
    assert_eq!(loader.target(), Some("a"));
    assert!(loader.data().is_none());

    assert!(loader.resolve("a", Some(vec![1, 2])));
    assert_eq!(loader.phase(), LoadPhase::Loaded);
    assert_eq!(loader.data(), Some(&vec![1, 2]));

    loader.close();
    assert_eq!(loader.phase(), LoadPhase::Idle);
    assert!(!loader.is_open());
    assert!(loader.target().is_none());
    assert!(loader.data().is_none());
}

#[test]
fn stale_resolution_is_discarded() {
    let mut loader: DetailLoader<Vec<u32>> = DetailLoader::new();
    loader.open("a");
    loader.open("b");
    // the superseded target's completion must change nothing
    assert!(!loader.resolve("a", Some(vec![1])));
    assert_eq!(loader.phase(), LoadPhase::Loading);
    assert!(loader.data().is_none());

    assert!(loader.resolve("b", Some(vec![2])));
    assert_eq!(loader.data(), Some(&vec![2]));

    // and a completion arriving after the newer one was applied is stale too
    assert!(!loader.resolve("a", Some(vec![1])));
    assert_eq!(loader.data(), Some(&vec![2]));
}

#[test]
fn stale_failure_is_discarded() {
    let mut loader: DetailLoader<Vec<u32>> = DetailLoader::new();
    loader.open("a");
    loader.open("b");
    assert!(!loader.fail("a"));
    assert_eq!(loader.phase(), LoadPhase::Loading);

    assert!(loader.fail("b"));
    assert_eq!(loader.phase(), LoadPhase::Failed);
    assert!(loader.data().is_none());
}

#[test]
fn resolution_after_close_is_discarded() {
    let mut loader: DetailLoader<Vec<u32>> = DetailLoader::new();
    loader.open("a");
    loader.close();
    assert!(!loader.resolve("a", Some(vec![1])));
    assert_eq!(loader.phase(), LoadPhase::Idle);
    assert!(loader.data().is_none());
}

#[test]
fn reopening_clears_previous_data() {
    let mut loader: DetailLoader<Vec<u32>> = DetailLoader::new();
    loader.open("a");
    assert!(loader.resolve("a", Some(vec![1])));
    loader.open("b");
    assert_eq!(loader.phase(), LoadPhase::Loading);
    assert!(loader.data().is_none());
}
