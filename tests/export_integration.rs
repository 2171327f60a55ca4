//! Integration tests for result export.
//!
//! These tests go through the filesystem: export, reload, compare.

use pagesim::{
    compare, export_report, export_result, load_artifact, simulate, Error, ExportOptions, PageId,
    Policy,
};
use tempfile::tempdir;

fn classic() -> Vec<PageId> {
    PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2])
}

/// Export a comparison and read it back unchanged.
#[test]
fn test_export_and_reload_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    let report = compare(&classic(), 3).unwrap();
    export_report(&report, &path, ExportOptions::json()).unwrap();

    let artifact = load_artifact(&path).unwrap();
    assert_eq!(artifact.capacity, 3);
    assert_eq!(artifact.reference_len, 13);
    for (policy, result) in report.iter() {
        let entry = artifact.entry(policy).unwrap();
        assert_eq!(entry.faults, result.faults);
        assert_eq!(entry.evictions, result.evictions);
        assert_eq!(entry.elapsed_nanos, result.elapsed.as_nanos() as u64);
        assert!(entry.history.is_none());
    }
}

/// Histories survive the round trip when requested.
#[test]
fn test_export_with_history() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("with_history.json");

    let report = compare(&classic(), 3).unwrap();
    export_report(&report, &path, ExportOptions::json().with_history()).unwrap();

    let artifact = load_artifact(&path).unwrap();
    let lru = artifact.entry(Policy::Lru).unwrap();
    assert_eq!(
        lru.history.as_ref().unwrap(),
        &report.get(Policy::Lru).unwrap().history
    );
}

/// A single result exports with the same layout.
#[test]
fn test_export_single_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("optimal.json");

    let result = simulate(Policy::Optimal, &classic(), 3).unwrap();
    export_result(&result, &path, ExportOptions::json()).unwrap();

    let artifact = load_artifact(&path).unwrap();
    assert_eq!(artifact.entries.len(), 1);
    assert_eq!(artifact.entry(Policy::Optimal).unwrap().faults, 7);
}

/// Two runs of the same input produce the same fault counts.
#[test]
fn test_cross_run_comparison() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("run1.json");
    let second = dir.path().join("run2.json");

    export_report(&compare(&classic(), 3).unwrap(), &first, ExportOptions::json()).unwrap();
    export_report(&compare(&classic(), 4).unwrap(), &second, ExportOptions::json()).unwrap();

    let run1 = load_artifact(&first).unwrap();
    let run2 = load_artifact(&second).unwrap();

    // More frames never hurts the stack policies on this input
    let delta = run2.fault_delta(&run1);
    assert_eq!(delta.len(), 3);
    assert!(delta[&Policy::Lru] <= 0);
    assert!(delta[&Policy::Optimal] <= 0);

    assert_eq!(run1.fault_delta(&run1).values().sum::<i64>(), 0);
}

#[test]
fn test_text_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.txt");

    let report = compare(&classic(), 3).unwrap();
    export_report(&report, &path, ExportOptions::text()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("FIFO"));
    assert!(text.contains("LRU"));
    assert!(text.contains("Optimal"));

    // Text exports are not loadable artifacts
    assert!(matches!(load_artifact(&path), Err(Error::Serialization(_))));
}

/// Unwritable destination surfaces as ExportIo.
#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("results.json");

    let report = compare(&classic(), 3).unwrap();
    match export_report(&report, &path, ExportOptions::json()) {
        Err(Error::ExportIo { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected ExportIo, got {:?}", other),
    }
}

/// Hand-edited artifacts are rejected on load.
#[test]
fn test_tampered_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    let report = compare(&classic(), 3).unwrap();
    export_report(&report, &path, ExportOptions::json()).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let tampered = json.replacen("\"faults\": 10", "\"faults\": 1", 1);
    assert_ne!(json, tampered);
    std::fs::write(&path, tampered).unwrap();

    assert!(matches!(load_artifact(&path), Err(Error::CorruptArtifact(_))));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_artifact(dir.path().join("absent.json")),
        Err(Error::Io(_))
    ));
}
