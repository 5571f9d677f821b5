//! Unit tests for the Rademacher module.
//!
//! This module contains tests verifying:
//! - Bit convention and accessors
//! - Alignment validation
//! - Apply contract (capacity, partial application, involution)
//! - Resize and reseed semantics
//! - Agreement between compact and seeded forms

use super::*;
use crate::error::SignVectorError;
use approx::assert_relative_eq;
use projrand_core::{RandomEngine, SeedableEngine, StdEngine, TwisterEngine};

fn signs(n: usize, seed: u64) -> CompactRademacher {
    CompactRademacher::new(n, seed).unwrap()
}

// ============================================================================
// Construction and accessors
// ============================================================================

#[test]
fn test_sizes_and_word_count() {
    let v = signs(256, 1);
    assert_eq!(v.size(), 256);
    assert_eq!(v.nwords(), 4);
    assert_eq!(v.nbytes(), 32);
    assert!(v.capacity() >= v.size());
    assert_eq!(v.seed(), 1);
    assert!(!v.is_empty());
}

#[test]
fn test_empty_vector() {
    let v = signs(0, 1);
    assert_eq!(v.size(), 0);
    assert!(v.is_empty());

    let mut target: Vec<f64> = vec![];
    assert!(v.apply(&mut target).is_ok());
}

#[test]
fn test_words_are_raw_engine_output() {
    let v = signs(192, 77);
    let mut expected = [0u64; 3];
    TwisterEngine::from_seed(77).fill(&mut expected);
    assert_eq!(v.words(), &expected);
}

#[test]
fn test_bit_convention() {
    let v = signs(128, 5);
    for i in 0..v.size() {
        let bit_set = (v.words()[i / 64] >> (i % 64)) & 1 == 1;
        assert_eq!(v.is_positive(i), bit_set);
        assert_eq!(v.at(i), if bit_set { 1 } else { -1 });
        assert_eq!(v.get(i), if bit_set { 1.0 } else { -1.0 });
        assert_eq!(v.value::<i64>(i), v.at(i) as i64);
    }
}

#[test]
fn test_signs_are_balanced() {
    let v = signs(1 << 16, 2024);
    let positives = v.iter().filter(|&s| s == 1).count();
    let ratio = positives as f64 / v.size() as f64;
    assert_relative_eq!(ratio, 0.5, epsilon = 0.01);
}

#[test]
fn test_typed_view_matches_accessors() {
    let v = signs(64, 3);
    let view = v.as_type::<f32>();
    assert_eq!(view.len(), 64);
    for (i, s) in view.iter().enumerate() {
        assert_eq!(s, v.at(i) as f32);
    }
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_misaligned_size_rejected() {
    let result = CompactRademacher::<TwisterEngine>::new(100, 1);
    assert_eq!(
        result.unwrap_err(),
        SignVectorError::InvalidSize {
            requested: 100,
            word_bits: 64
        }
    );
}

#[test]
fn test_misaligned_resize_leaves_vector_intact() {
    let mut v = signs(128, 4);
    let before = v.clone();
    assert_eq!(v.resize(130), Err(SignVectorError::invalid_size(130)));
    assert_eq!(v, before);
}

#[test]
fn test_failed_allocation_on_resize_leaves_vector_intact() {
    let mut v = signs(128, 4);
    let before = v.clone();
    let result = v.resize(usize::MAX & !BITMASK);
    assert!(matches!(result, Err(SignVectorError::OutOfMemory { .. })));
    assert_eq!(v, before);
    assert_eq!(v.size(), 128);
}

#[test]
fn test_aligned_size() {
    assert_eq!(aligned_size(1), 64);
    assert_eq!(aligned_size(64), 64);
    assert_eq!(aligned_size(65), 128);
}

#[test]
fn test_out_of_memory_reported() {
    let result = CompactRademacher::<TwisterEngine>::new(usize::MAX & !BITMASK, 1);
    assert!(matches!(result, Err(SignVectorError::OutOfMemory { .. })));
}

// ============================================================================
// Apply
// ============================================================================

#[test]
fn test_apply_multiplies_by_sign() {
    let v = signs(128, 12);
    let original: Vec<f64> = (0..128).map(|i| i as f64 + 0.5).collect();
    let mut target = original.clone();
    v.apply(&mut target).unwrap();

    for i in 0..128 {
        assert_eq!(target[i], original[i] * v.get(i));
    }
}

#[test]
fn test_apply_integers() {
    let v = signs(64, 12);
    let mut target = vec![3_i32; 64];
    v.apply(&mut target).unwrap();
    for (i, &x) in target.iter().enumerate() {
        assert_eq!(x, 3 * v.at(i));
    }
}

#[test]
fn test_apply_longer_vector_fails() {
    let v = signs(64, 1);
    let mut target = vec![1.0_f64; 65];
    assert_eq!(
        v.apply(&mut target),
        Err(SignVectorError::Capacity {
            vector_len: 65,
            capacity: 64
        })
    );
    // Untouched on failure
    assert!(target.iter().all(|&x| x == 1.0));
}

#[test]
fn test_apply_shorter_vector_is_partial() {
    let v = signs(128, 8);
    let mut target = vec![1.0_f64; 70];
    v.apply(&mut target).unwrap();
    for (i, &x) in target.iter().enumerate() {
        assert_eq!(x, v.get(i));
    }
}

#[test]
fn test_apply_is_involution() {
    let v = signs(512, 99);
    let original: Vec<f64> = (0..512).map(|i| (i as f64).sin()).collect();
    let mut target = original.clone();
    v.apply(&mut target).unwrap();
    v.apply(&mut target).unwrap();
    for (a, b) in target.iter().zip(&original) {
        assert_relative_eq!(a, b);
    }
}

#[test]
fn test_apply_into() {
    let v = signs(64, 6);
    let input: Vec<f32> = (0..64).map(|i| i as f32).collect();
    let mut output = vec![0.0_f32; 64];
    v.apply_into(&input, &mut output).unwrap();

    let mut expected = input.clone();
    v.apply(&mut expected).unwrap();
    assert_eq!(output, expected);

    let mut short = vec![0.0_f32; 10];
    assert_eq!(
        v.apply_into(&input, &mut short),
        Err(SignVectorError::length_mismatch(64, 10))
    );
}

#[test]
fn test_apply_par_matches_apply() {
    let v = signs(4096, 21);
    let original: Vec<f64> = (0..4000).map(|i| i as f64 * 0.25 - 7.0).collect();

    let mut serial = original.clone();
    let mut parallel = original.clone();
    v.apply(&mut serial).unwrap();
    v.apply_par(&mut parallel).unwrap();
    assert_eq!(serial, parallel);

    let mut too_long = vec![0.0_f64; 4097];
    assert!(matches!(
        v.apply_par(&mut too_long),
        Err(SignVectorError::Capacity { .. })
    ));
}

// ============================================================================
// Resize, reseed, zero
// ============================================================================

#[test]
fn test_resize_equals_reconstruction() {
    let mut v = signs(128, 42);
    v.resize(320).unwrap();
    assert_eq!(v, signs(320, 42));

    v.resize(64).unwrap();
    assert_eq!(v, signs(64, 42));
}

#[test]
fn test_resize_same_size_is_stable() {
    let mut v = signs(256, 7);
    let before = v.clone();
    v.resize(256).unwrap();
    assert_eq!(v, before);
}

#[test]
fn test_reseed_rerandomises() {
    let mut v = signs(256, 1);
    v.reseed(2);
    assert_eq!(v.seed(), 2);
    assert_eq!(v, signs(256, 2));
    assert_ne!(v, signs(256, 1));
}

#[test]
fn test_zero_and_randomize() {
    let mut v = signs(128, 10);
    v.zero();
    assert!(v.iter().all(|s| s == -1));

    v.randomize();
    assert_eq!(v, signs(128, 10));
}

#[test]
fn test_reserve_keeps_size() {
    let mut v = signs(64, 1);
    v.reserve(1024).unwrap();
    assert_eq!(v.size(), 64);
    assert!(v.capacity() >= 1024);
    assert_eq!(v, signs(64, 1));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality_requires_same_size() {
    let small = signs(64, 5);
    let large = signs(128, 5);
    // Same prefix word, different length
    assert_eq!(small.words()[0], large.words()[0]);
    assert_ne!(small, large);
}

#[test]
fn test_equality_ignores_seed_and_engine_type() {
    let twister = signs(64, 5);
    let mut std_signs = CompactRademacher::<StdEngine>::new(64, 5).unwrap();
    assert_ne!(twister, std_signs);

    std_signs.zero();
    let mut other = signs(64, 6);
    other.zero();
    assert_eq!(other, std_signs);
}

// ============================================================================
// Seeded form
// ============================================================================

#[test]
fn test_seeded_matches_compact() {
    let seeded: SeededRademacher = SeededRademacher::new(1024, 13);
    let compact = seeded.to_compact().unwrap();
    assert_eq!(compact, signs(1024, 13));

    let mut a: Vec<f64> = (0..1000).map(|i| i as f64).collect();
    let mut b = a.clone();
    seeded.apply(&mut a).unwrap();
    compact.apply(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_seeded_unaligned_size() {
    let seeded: SeededRademacher = SeededRademacher::new(100, 13);
    let mut target = vec![1_i64; 100];
    seeded.apply(&mut target).unwrap();

    let compact = signs(128, 13);
    for (i, &x) in target.iter().enumerate() {
        assert_eq!(x, compact.at(i) as i64);
    }

    assert!(matches!(
        seeded.to_compact(),
        Err(SignVectorError::InvalidSize { .. })
    ));
}

#[test]
fn test_seeded_capacity_and_resize() {
    let mut seeded: SeededRademacher = SeededRademacher::new(64, 1);
    let mut target = vec![1.0_f64; 65];
    assert!(matches!(
        seeded.apply(&mut target),
        Err(SignVectorError::Capacity { .. })
    ));

    seeded.resize(128);
    assert_eq!(seeded.size(), 128);
    assert!(seeded.apply(&mut target).is_ok());
}
