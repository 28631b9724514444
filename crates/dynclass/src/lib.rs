// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynclass - Runtime record types
//!
//! Describe a record shape at runtime and get back a type that behaves as if
//! it had been declared statically: named field access, positional
//! construction, and value-based equality and hashing.
//!
//! The core is [`TypeSynthesizer`]: a thread-safe cache mapping a [`Schema`]
//! to exactly one [`TypeDescriptor`]. Requests with equal schemas receive the
//! same descriptor handle, so instances built from either request compare
//! equal by value.
//!
//! ## Example
//!
//! ```rust
//! use dynclass::{TypeSynthesizer, TypeTag, Value};
//! use std::sync::Arc;
//!
//! let synth = TypeSynthesizer::new();
//! let person = synth
//!     .create_type([("Id", TypeTag::I32), ("Name", TypeTag::String)])
//!     .unwrap();
//!
//! let a = person.construct([Value::from(1i32), Value::from("Teste")]).unwrap();
//! assert_eq!(a.get::<i32>("Id").unwrap(), 1);
//! assert_eq!(a.to_string(), "{Id=1, Name=Teste}");
//!
//! // Same schema, same type.
//! let again = synth
//!     .create_type([("Id", TypeTag::I32), ("Name", TypeTag::String)])
//!     .unwrap();
//! assert!(Arc::ptr_eq(&person, &again));
//!
//! let mut b = again.instantiate();
//! b.set("Id", 1i32).unwrap();
//! b.set("Name", "Teste").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.hash_code(), b.hash_code());
//! ```
//!
//! ## Modules Overview
//!
//! - [`schema`] - Field lists and type tags
//! - [`synthesizer`] - Schema-keyed type cache
//! - [`descriptor`] - Synthesized types and their constructors
//! - [`instance`] - Record values
//! - [`value`] - Typed slot values

/// Synthesizer configuration.
pub mod config;
/// Synthesized record types.
pub mod descriptor;
/// Error taxonomy.
pub mod error;
/// Deterministic FNV-1a hashing and the field hash combiner.
pub mod hashing;
/// Record values built from a descriptor.
pub mod instance;
/// Record shapes and field type tags.
pub mod schema;
/// Schema-keyed cache of synthesized types.
pub mod synthesizer;
/// Dynamic slot values.
pub mod value;

pub use config::SynthesizerConfig;
pub use descriptor::TypeDescriptor;
pub use error::{DynClassError, Result};
pub use instance::{FromValue, Instance};
pub use schema::{FieldSpec, Schema, SchemaBuilder, TypeTag};
pub use synthesizer::{LookupStats, TypeSynthesizer};
pub use value::Value;
