// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value slots.

use crate::instance::Instance;
use crate::schema::TypeTag;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A value that can fill a field slot of any declared [`TypeTag`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Primitives
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),

    // Composites
    Record(Instance),

    /// Absent nested record.
    Null,
}

impl Value {
    /// Zero value for a declared type.
    pub fn zero(tag: &TypeTag) -> Self {
        match tag {
            TypeTag::Bool => Self::Bool(false),
            TypeTag::U8 => Self::U8(0),
            TypeTag::U16 => Self::U16(0),
            TypeTag::U32 => Self::U32(0),
            TypeTag::U64 => Self::U64(0),
            TypeTag::I8 => Self::I8(0),
            TypeTag::I16 => Self::I16(0),
            TypeTag::I32 => Self::I32(0),
            TypeTag::I64 => Self::I64(0),
            TypeTag::F32 => Self::F32(0.0),
            TypeTag::F64 => Self::F64(0.0),
            TypeTag::Char => Self::Char('\0'),
            TypeTag::String => Self::String(String::new()),
            TypeTag::Record(_) => Self::Null,
        }
    }

    /// Check whether this value may be stored in a slot declared as `tag`.
    ///
    /// No coercion: an `I64` never fits an `I32` slot. A record value fits
    /// only the exact descriptor it was built from.
    pub fn fits(&self, tag: &TypeTag) -> bool {
        match (self, tag) {
            (Self::Bool(_), TypeTag::Bool)
            | (Self::U8(_), TypeTag::U8)
            | (Self::U16(_), TypeTag::U16)
            | (Self::U32(_), TypeTag::U32)
            | (Self::U64(_), TypeTag::U64)
            | (Self::I8(_), TypeTag::I8)
            | (Self::I16(_), TypeTag::I16)
            | (Self::I32(_), TypeTag::I32)
            | (Self::I64(_), TypeTag::I64)
            | (Self::F32(_), TypeTag::F32)
            | (Self::F64(_), TypeTag::F64)
            | (Self::Char(_), TypeTag::Char)
            | (Self::String(_), TypeTag::String)
            | (Self::Null, TypeTag::Record(_)) => true,
            (Self::Record(inst), TypeTag::Record(desc)) => Arc::ptr_eq(inst.descriptor(), desc),
            _ => false,
        }
    }

    /// Type name of the value, for diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Record(inst) => inst.type_name(),
            Self::Null => "null",
        }
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as nested record.
    pub fn as_record(&self) -> Option<&Instance> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }
}

// -0.0 == 0.0, so both must feed the same bits.
fn float_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::U8(v) => v.hash(state),
            Self::U16(v) => v.hash(state),
            Self::U32(v) => v.hash(state),
            Self::U64(v) => v.hash(state),
            Self::I8(v) => v.hash(state),
            Self::I16(v) => v.hash(state),
            Self::I32(v) => v.hash(state),
            Self::I64(v) => v.hash(state),
            Self::F32(v) => float_bits(f64::from(*v)).hash(state),
            Self::F64(v) => float_bits(*v).hash(state),
            Self::Char(v) => v.hash(state),
            Self::String(v) => v.hash(state),
            Self::Record(inst) => inst.hash_code().hash(state),
            Self::Null => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::Record(inst) => write!(f, "{}", inst),
            Self::Null => Ok(()),
        }
    }
}

// Conversion traits
macro_rules! impl_from_primitive {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_primitive!(bool, Bool);
impl_from_primitive!(u8, U8);
impl_from_primitive!(u16, U16);
impl_from_primitive!(u32, U32);
impl_from_primitive!(u64, U64);
impl_from_primitive!(i8, I8);
impl_from_primitive!(i16, I16);
impl_from_primitive!(i32, I32);
impl_from_primitive!(i64, I64);
impl_from_primitive!(f32, F32);
impl_from_primitive!(f64, F64);
impl_from_primitive!(char, Char);
impl_from_primitive!(String, String);
impl_from_primitive!(Instance, Record);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Option<Instance>> for Value {
    fn from(v: Option<Instance>) -> Self {
        v.map_or(Self::Null, Self::Record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::fnv1a;

    #[test]
    fn test_zero_values() {
        assert_eq!(Value::zero(&TypeTag::I32), Value::I32(0));
        assert_eq!(Value::zero(&TypeTag::String), Value::String(String::new()));
        assert_eq!(Value::zero(&TypeTag::Bool), Value::Bool(false));
        assert_eq!(Value::zero(&TypeTag::Char), Value::Char('\0'));
    }

    #[test]
    fn test_fits_without_coercion() {
        assert!(Value::from(1i32).fits(&TypeTag::I32));
        assert!(!Value::from(1i64).fits(&TypeTag::I32));
        assert!(!Value::from(1u32).fits(&TypeTag::I32));
        assert!(Value::from("x").fits(&TypeTag::String));
        assert!(!Value::from('x').fits(&TypeTag::String));
        assert!(!Value::Null.fits(&TypeTag::String));
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        let pos = Value::F64(0.0);
        let neg = Value::F64(-0.0);
        assert_eq!(pos, neg);
        assert_eq!(fnv1a(&pos), fnv1a(&neg));

        assert_eq!(fnv1a(&Value::F32(0.0)), fnv1a(&Value::F32(-0.0)));
    }

    #[test]
    fn test_hash_distinguishes_variants() {
        assert_ne!(fnv1a(&Value::I32(1)), fnv1a(&Value::I64(1)));
    }

    #[test]
    fn test_display_is_natural() {
        assert_eq!(Value::from(42i32).to_string(), "42");
        assert_eq!(Value::from("Teste").to_string(), "Teste");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(2.5f64).to_string(), "2.5");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(7i32).as_i32(), Some(7));
        assert_eq!(Value::from(7i32).as_i64(), None);
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert!(Value::from(None).is_null());
    }
}
