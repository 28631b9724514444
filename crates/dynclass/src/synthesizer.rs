// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-keyed cache of synthesized types.
//!
//! The synthesizer guarantees one [`TypeDescriptor`] per distinct
//! [`Schema`] for its whole lifetime. Hits are served under a shared read
//! lock, so concurrent lookups never block each other. A miss takes the
//! write lock, re-checks the map (another thread may have won the race),
//! and only then synthesizes and publishes the descriptor. The map is
//! append-only: entries are never evicted or replaced.

use crate::config::SynthesizerConfig;
use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::schema::{FieldSpec, Schema, TypeTag};
use log::{debug, trace};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    pub last_miss_ns: u64,
}

/// Builds and deduplicates record types by schema.
///
/// Share it with `Arc<TypeSynthesizer>`; there is no process-wide instance.
pub struct TypeSynthesizer {
    config: SynthesizerConfig,
    classes: RwLock<HashMap<Schema, Arc<TypeDescriptor>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    last_miss_ns: AtomicU64,
}

impl TypeSynthesizer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SynthesizerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SynthesizerConfig) -> Self {
        let classes = HashMap::with_capacity(config.initial_capacity);
        Self {
            config,
            classes: RwLock::new(classes),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            last_miss_ns: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Return the descriptor for `schema`, synthesizing it on first request.
    ///
    /// Every call with an equal schema returns the same `Arc` (pointer
    /// identity), including concurrent first-time calls.
    pub fn get_or_create(&self, schema: &Schema) -> Arc<TypeDescriptor> {
        if let Some(hit) = self.try_peek(schema) {
            self.record_hit();
            trace!("[TypeSynthesizer] hit {} for {}", hit.name(), schema);
            return hit;
        }

        let mut classes = self.classes.write();
        if let Some(hit) = classes.get(schema) {
            self.record_hit();
            return Arc::clone(hit);
        }

        let start = Instant::now();
        let ordinal = classes.len() + 1;
        let name = format!("{}{}", self.config.name_prefix, ordinal);
        let built = Arc::new(TypeDescriptor::synthesize(ordinal, name, schema.clone()));
        classes.insert(schema.clone(), Arc::clone(&built));
        drop(classes);

        let elapsed = start.elapsed();
        self.record_miss(start);
        debug!(
            "[TypeSynthesizer] synthesized {} with {} field(s) in {:?}",
            built.name(),
            built.field_count(),
            elapsed
        );
        built
    }

    /// Validate a field list and return its descriptor.
    pub fn create_type<I, S>(&self, fields: I) -> Result<Arc<TypeDescriptor>>
    where
        I: IntoIterator<Item = (S, TypeTag)>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(FieldSpec::from).collect();
        let schema = Schema::new(fields)?;
        Ok(self.get_or_create(&schema))
    }

    /// Read-only lookup; never synthesizes.
    pub fn lookup(&self, schema: &Schema) -> Option<Arc<TypeDescriptor>> {
        self.try_peek(schema)
    }

    /// Number of synthesized types.
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    /// Snapshot of every synthesized type, in creation order.
    pub fn descriptors(&self) -> Vec<Arc<TypeDescriptor>> {
        let classes = self.classes.read();
        let mut all: Vec<_> = classes.values().map(Arc::clone).collect();
        drop(classes);
        all.sort_by_key(|desc| desc.ordinal());
        all
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        LookupStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            last_miss_ns: self.last_miss_ns.load(Ordering::Relaxed),
        }
    }

    fn try_peek(&self, schema: &Schema) -> Option<Arc<TypeDescriptor>> {
        let classes = self.classes.read();
        classes.get(schema).map(Arc::clone)
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self, start: Instant) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.last_miss_ns.store(elapsed, Ordering::Relaxed);
    }
}

impl Default for TypeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSynthesizer")
            .field("config", &self.config)
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
