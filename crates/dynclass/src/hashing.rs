// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Deterministic hashing for schemas and instances.
//!
//! `RandomState` would make hash codes differ between runs, so every hash the
//! crate exposes goes through a fixed-key FNV-1a [`Hasher`] and the
//! multiply-and-add combiner below.

use std::hash::{Hash, Hasher};

pub(crate) const FNV1A_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
pub(crate) const FNV1A_PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// Odd multiplier used to fold field hashes in declaration order.
///
/// Bit pattern of `-1521134295i32`.
pub const HASH_MULTIPLIER: u64 = 0xA555_5529;

/// FNV-1a streaming hasher with a fixed offset basis.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self {
            state: FNV1A_OFFSET_BASIS_64,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV1A_PRIME_64);
        }
    }
}

/// Hash any `Hash` value with [`Fnv1aHasher`].
pub fn fnv1a<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `acc * HASH_MULTIPLIER + next`, wrapping.
#[inline]
pub fn combine(acc: u64, next: u64) -> u64 {
    acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(next)
}
