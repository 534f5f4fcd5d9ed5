//! Partition Validation Tests
//!
//! A broken zero/live table must be rejected before anything is generated.

#![allow(clippy::unwrap_used)]

use sha1_precompute::{GeneratorError, IndexPartition};

fn all_but(excluded: &[usize]) -> Vec<usize> {
    (0..80).filter(|i| !excluded.contains(i)).collect()
}

// =============================================================================
// ACCEPTED TABLES
// =============================================================================

#[test]
fn test_explicit_lists_matching_complement() {
    let zero = [0, 2, 3, 4];
    let explicit = IndexPartition::new(&zero, &all_but(&zero)).unwrap();
    let derived = IndexPartition::from_zero(&zero).unwrap();
    assert_eq!(explicit, derived);
}

#[test]
fn test_empty_zero_set_is_valid() {
    let partition = IndexPartition::from_zero(&[]).unwrap();
    assert_eq!(partition.zero_indices().count(), 0);
    assert_eq!(partition.live_indices().count(), 80);
}

// =============================================================================
// REJECTED TABLES
// =============================================================================

#[test]
fn test_overlap_is_rejected() {
    let zero = [0, 2, 3];
    let mut live = all_but(&zero);
    live.push(3);

    let err = IndexPartition::new(&zero, &live).unwrap_err();
    assert!(matches!(err, GeneratorError::Overlap { index: 3 }), "{err}");
}

#[test]
fn test_uncovered_index_is_rejected() {
    let zero = [0, 2];
    let live = all_but(&[0, 2, 42]);

    let err = IndexPartition::new(&zero, &live).unwrap_err();
    assert!(matches!(err, GeneratorError::Uncovered { index: 42 }), "{err}");
}

#[test]
fn test_out_of_range_index_is_rejected() {
    let err = IndexPartition::from_zero(&[0, 80]).unwrap_err();
    assert!(matches!(err, GeneratorError::IndexOutOfRange { index: 80 }), "{err}");

    let err = IndexPartition::new(&[], &[0, 1, 99]).unwrap_err();
    assert!(matches!(err, GeneratorError::IndexOutOfRange { index: 99 }), "{err}");
}

#[test]
fn test_derived_zero_with_live_source_is_rejected() {
    // W[16] depends on W[13], W[8], W[2], W[0]; W[13] is live here.
    let err = IndexPartition::from_zero(&[0, 2, 8, 16]).unwrap_err();
    assert!(
        matches!(err, GeneratorError::InconsistentZero { index: 16, source_index: 13 }),
        "{err}"
    );
}

#[test]
fn test_error_messages_name_the_index() {
    let err = IndexPartition::from_zero(&[0, 2, 8, 16]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "schedule index 16 is listed as zero but its source 13 is live"
    );
}
