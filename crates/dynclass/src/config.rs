// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Synthesizer configuration.

/// Prefix of generated type names (`DynamicClass1`, `DynamicClass2`, ...).
pub const DEFAULT_NAME_PREFIX: &str = "DynamicClass";

/// Initial capacity of the schema cache.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for a [`TypeSynthesizer`](crate::TypeSynthesizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizerConfig {
    /// Prefix of generated type names.
    pub name_prefix: String,
    /// Number of schemas the cache holds before its first reallocation.
    pub initial_capacity: usize,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl SynthesizerConfig {
    /// Set the type name prefix. An empty prefix keeps the default.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.name_prefix = prefix;
        }
        self
    }

    /// Set the initial cache capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
