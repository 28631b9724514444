// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record shapes: ordered lists of named, typed fields.
//!
//! A [`Schema`] is the cache key of the synthesizer. Two schemas are equal
//! when their fields are pairwise equal in the same order, no matter how
//! each schema was put together.

use crate::descriptor::TypeDescriptor;
use crate::error::{DynClassError, Result};
use crate::hashing::{combine, fnv1a};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Semantic type token of a field.
///
/// Tokens are compared by identity only: primitive tags by variant and
/// `Record` tags by descriptor identity.
#[derive(Debug, Clone)]
pub enum TypeTag {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    String,
    /// A field holding an instance of another synthesized type.
    Record(Arc<TypeDescriptor>),
}

impl TypeTag {
    fn code(&self) -> u8 {
        match self {
            Self::Bool => 0,
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 3,
            Self::U64 => 4,
            Self::I8 => 5,
            Self::I16 => 6,
            Self::I32 => 7,
            Self::I64 => 8,
            Self::F32 => 9,
            Self::F64 => 10,
            Self::Char => 11,
            Self::String => 12,
            Self::Record(_) => 13,
        }
    }

    /// Name used in diagnostics and by [`FromStr`].
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
            Self::Record(desc) => desc.name(),
        }
    }

    /// Check if this tag names a synthesized record type.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            _ => self.code() == other.code(),
        }
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.code());
        if let Self::Record(desc) = self {
            // Consistent with the pointer identity used by `eq`.
            state.write_usize(Arc::as_ptr(desc) as usize);
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = DynClassError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match s.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Self::Bool,
            "u8" | "byte" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "i8" => Self::I8,
            "i16" | "short" => Self::I16,
            "i32" | "int" | "int32" => Self::I32,
            "i64" | "long" | "int64" => Self::I64,
            "f32" | "float" => Self::F32,
            "f64" | "double" => Self::F64,
            "char" => Self::Char,
            "string" | "str" => Self::String,
            _ => return Err(DynClassError::UnknownType(s.to_string())),
        };
        Ok(tag)
    }
}

/// A single `(name, type)` pair of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: Arc<str>,
    tag: TypeTag,
}

impl FieldSpec {
    /// Create a field spec. The name is validated when the schema is built.
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            tag,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    /// Declared field type.
    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }
}

impl<S: Into<String>> From<(S, TypeTag)> for FieldSpec {
    fn from((name, tag): (S, TypeTag)) -> Self {
        Self::new(name, tag)
    }
}

/// Immutable, order-preserving record shape.
///
/// Cloning is cheap: the field list is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    fields: Arc<[FieldSpec]>,
}

impl Schema {
    /// Build a schema, rejecting empty and duplicate field names.
    ///
    /// Names are compared case-sensitively, so `id` and `Id` may coexist.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if field.name().is_empty() {
                return Err(DynClassError::invalid_schema(format!(
                    "field #{} has an empty name",
                    position
                )));
            }
            if !seen.insert(field.name()) {
                return Err(DynClassError::invalid_schema(format!(
                    "duplicate field name '{}'",
                    field.name()
                )));
            }
        }

        Ok(Self {
            fields: fields.into(),
        })
    }

    /// Schema with no fields.
    pub fn empty() -> Self {
        Self {
            fields: Arc::from(Vec::new()),
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Get field position by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Deterministic, order-sensitive hash of the field list.
    ///
    /// Equal schemas always share a fingerprint. `Record` fields hash by
    /// descriptor address, so fingerprints of such schemas are only stable
    /// within one process.
    pub fn fingerprint(&self) -> u64 {
        self.fields
            .iter()
            .fold(0, |acc, field| combine(acc, fnv1a(field)))
    }
}

impl TryFrom<Vec<FieldSpec>> for Schema {
    type Error = DynClassError;

    fn try_from(fields: Vec<FieldSpec>) -> Result<Self> {
        Self::new(fields)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name(), field.tag())?;
        }
        f.write_str(")")
    }
}

/// Fluent builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.fields.push(FieldSpec::new(name, tag));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeTag::String)
    }

    /// Add a field holding an instance of another synthesized type.
    pub fn record_field(self, name: impl Into<String>, nested: &Arc<TypeDescriptor>) -> Self {
        self.field(name, TypeTag::Record(Arc::clone(nested)))
    }

    /// Validate and build the schema.
    pub fn build(self) -> Result<Schema> {
        Schema::new(self.fields)
    }
}
