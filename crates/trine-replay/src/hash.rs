//! Hashing utilities for field and run-parameter comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks between runs.

use trine_core::{RuleIndex, SpacetimeField, TimeSteps};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a hash over every cell of a spacetime field.
///
/// The width is hashed first, then each row's time index followed by
/// its cells. Folding in the time index makes row order significant, and
/// the width keeps `[[0,0]]` and `[[0],[0]]` apart.
pub fn field_hash(field: &SpacetimeField) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, field.width() as u64);
    for (t, row) in field.iter().enumerate() {
        hash = fnv1a_u64(hash, t as u64);
        for cell in row {
            hash = fnv1a_byte(hash, cell.value());
        }
    }
    hash
}

/// Compute a hash over the parameters of a run.
///
/// Hashes rule index, width, step count and seed. A missing seed hashes
/// differently from every explicit seed.
pub fn run_hash(
    rule_index: RuleIndex,
    width: usize,
    time_steps: TimeSteps,
    seed: Option<u64>,
) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, u64::from(rule_index.get()));
    hash = fnv1a_u64(hash, width as u64);
    hash = fnv1a_u64(hash, time_steps.get() as u64);
    match seed {
        Some(seed) => {
            hash = fnv1a_byte(hash, 1);
            hash = fnv1a_u64(hash, seed);
        }
        None => hash = fnv1a_byte(hash, 0),
    }
    hash
}
