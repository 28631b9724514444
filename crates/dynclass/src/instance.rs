// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instances of synthesized types.

use crate::descriptor::{check_slot, TypeDescriptor};
use crate::error::{DynClassError, Result};
use crate::hashing::{combine, fnv1a};
use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A record value: one slot per field of its descriptor.
///
/// Equality and hashing follow the descriptor: two instances are equal only
/// if they share the same descriptor (identity) and every slot compares
/// equal. `Eq` is implemented for use as a map key; a float slot holding
/// NaN makes an instance unequal to itself.
#[derive(Clone)]
pub struct Instance {
    descriptor: Arc<TypeDescriptor>,
    slots: Vec<Value>,
}

impl Instance {
    /// Slots must already match the descriptor's schema.
    pub(crate) fn from_slots(descriptor: Arc<TypeDescriptor>, slots: Vec<Value>) -> Self {
        debug_assert_eq!(descriptor.field_count(), slots.len());
        Self { descriptor, slots }
    }

    /// Get the type descriptor.
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Get the type name.
    pub fn type_name(&self) -> &str {
        self.descriptor.name()
    }

    /// Get a field value by name.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self.get_field(name)?;
        T::from_value(value).ok_or_else(|| DynClassError::TypeMismatch {
            field: name.to_string(),
            expected: T::EXPECTED.to_string(),
            got: value.type_name().to_string(),
        })
    }

    /// Set a field value by name.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.set_field(name, value.into())
    }

    /// Get field by name.
    pub fn get_field(&self, name: &str) -> Result<&Value> {
        let index = self.slot(name)?;
        Ok(&self.slots[index])
    }

    /// Replace a field value, keeping the declared type.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        let index = self.slot(name)?;
        self.store(index, value)
    }

    /// Get field by declaration position.
    pub fn get_at(&self, index: usize) -> Result<&Value> {
        self.slots
            .get(index)
            .ok_or_else(|| DynClassError::UnknownField(format!("#{}", index)))
    }

    /// Set field by declaration position.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index >= self.slots.len() {
            return Err(DynClassError::UnknownField(format!("#{}", index)));
        }
        self.store(index, value.into())
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.descriptor
            .fields()
            .iter()
            .map(|field| field.name())
            .zip(self.slots.iter())
    }

    /// Slot values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.slots
    }

    /// Into slot values.
    pub fn into_values(self) -> Vec<Value> {
        self.slots
    }

    /// Schema-seeded hash of the slot values.
    ///
    /// Stable across calls and runs for an unmodified instance (except for
    /// nested record types, see [`Schema::fingerprint`](crate::Schema::fingerprint)).
    pub fn hash_code(&self) -> u64 {
        self.slots
            .iter()
            .fold(self.descriptor.name_seed(), |acc, value| {
                combine(acc, fnv1a(value))
            })
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.descriptor
            .field_index(name)
            .ok_or_else(|| DynClassError::UnknownField(name.to_string()))
    }

    fn store(&mut self, index: usize, value: Value) -> Result<()> {
        check_slot(&self.descriptor.fields()[index], &value)?;
        self.slots[index] = value;
        Ok(())
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor) && self.slots == other.slots
    }
}

impl Eq for Instance {}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.fields() {
            map.entry(&name, value);
        }
        map.finish()?;
        write!(f, " as {}", self.type_name())
    }
}

/// Trait for typed extraction from a [`Value`].
pub trait FromValue: Sized {
    /// Type name reported on mismatch.
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $name:expr) => {
        impl FromValue for $ty {
            const EXPECTED: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(u8, U8, "u8");
impl_from_value!(u16, U16, "u16");
impl_from_value!(u32, U32, "u32");
impl_from_value!(u64, U64, "u64");
impl_from_value!(i8, I8, "i8");
impl_from_value!(i16, I16, "i16");
impl_from_value!(i32, I32, "i32");
impl_from_value!(i64, I64, "i64");
impl_from_value!(f32, F32, "f32");
impl_from_value!(f64, F64, "f64");
impl_from_value!(char, Char, "char");

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Instance {
    const EXPECTED: &'static str = "record";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_record().cloned()
    }
}

impl FromValue for Option<Instance> {
    const EXPECTED: &'static str = "record";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Record(inst) => Some(Some(inst.clone())),
            Value::Null => Some(None),
            _ => None,
        }
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}
