// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Synthesized record types.
//!
//! A [`TypeDescriptor`] plays the part of a class declared at compile time:
//! it owns the field list, a name-to-slot table standing in for the field
//! accessors, the constructors, and the schema-dependent hash seed used by
//! instance hashing. Descriptors are only built by
//! [`TypeSynthesizer`](crate::TypeSynthesizer) and are immutable afterwards.

use crate::error::{DynClassError, Result};
use crate::hashing::{combine, fnv1a};
use crate::instance::Instance;
use crate::schema::{FieldSpec, Schema, TypeTag};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Runtime definition of a synthesized record type.
///
/// Identity matters: two descriptors built from equal schemas are still two
/// different types, and their instances never compare equal. Compare handles
/// with [`Arc::ptr_eq`].
pub struct TypeDescriptor {
    ordinal: usize,
    name: String,
    schema: Schema,
    slots: HashMap<Arc<str>, usize>,
    name_seed: u64,
}

impl TypeDescriptor {
    /// Build a descriptor from a validated schema.
    ///
    /// `ordinal` is the creation index within the owning synthesizer.
    pub(crate) fn synthesize(ordinal: usize, name: String, schema: Schema) -> Self {
        let mut slots = HashMap::with_capacity(schema.len());
        let mut name_seed = 0u64;

        for (index, field) in schema.iter().enumerate() {
            slots.insert(Arc::clone(field.shared_name()), index);
            name_seed = combine(name_seed, fnv1a(field.name()));
        }

        Self {
            ordinal,
            name,
            schema,
            slots,
            name_seed,
        }
    }

    /// Generated type name, unique within its synthesizer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation index within the owning synthesizer, starting at 1.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Schema this type was synthesized from.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        self.schema.fields()
    }

    pub fn field_count(&self) -> usize {
        self.schema.len()
    }

    /// Slot index of a field.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Declared type of a field.
    pub fn field_type(&self, name: &str) -> Option<&TypeTag> {
        self.field_index(name)
            .map(|index| self.schema.fields()[index].tag())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Hash seed derived from the field names alone.
    ///
    /// Every instance hash starts here, so instances of an empty type all
    /// share this value.
    pub fn name_seed(&self) -> u64 {
        self.name_seed
    }

    /// Zero-argument constructor: every slot holds its type's zero value.
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        let slots = self
            .schema
            .iter()
            .map(|field| Value::zero(field.tag()))
            .collect();
        Instance::from_slots(Arc::clone(self), slots)
    }

    /// Positional constructor, one value per field in declaration order.
    pub fn construct<I>(self: &Arc<Self>, values: I) -> Result<Instance>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.field_count() {
            return Err(DynClassError::ArityMismatch {
                expected: self.field_count(),
                got: values.len(),
            });
        }

        for (field, value) in self.schema.iter().zip(&values) {
            check_slot(field, value)?;
        }

        Ok(Instance::from_slots(Arc::clone(self), values))
    }
}

/// Reject a value that does not fit the field's declared type.
pub(crate) fn check_slot(field: &FieldSpec, value: &Value) -> Result<()> {
    if value.fits(field.tag()) {
        Ok(())
    } else {
        Err(DynClassError::TypeMismatch {
            field: field.name().to_string(),
            expected: field.tag().name().to_string(),
            got: value.type_name().to_string(),
        })
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &format_args!("{}", self.schema))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.schema)
    }
}
