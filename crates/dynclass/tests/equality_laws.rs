// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Equality and hashing laws of synthesized instances.

use dynclass::{DynClassError, TypeSynthesizer, TypeTag, Value};

fn sample_values() -> Vec<Value> {
    vec![
        Value::from(true),
        Value::from(7u8),
        Value::from(-3i16),
        Value::from(42u32),
        Value::from(-9_000_000_000i64),
        Value::from(1.5f32),
        Value::from(-0.25f64),
        Value::from('z'),
        Value::from("hello"),
    ]
}

fn wide_type(synth: &TypeSynthesizer) -> std::sync::Arc<dynclass::TypeDescriptor> {
    synth
        .create_type([
            ("flag", TypeTag::Bool),
            ("small", TypeTag::U8),
            ("short", TypeTag::I16),
            ("count", TypeTag::U32),
            ("big", TypeTag::I64),
            ("ratio", TypeTag::F32),
            ("delta", TypeTag::F64),
            ("letter", TypeTag::Char),
            ("label", TypeTag::String),
        ])
        .expect("valid schema")
}

#[test]
fn constructed_values_read_back_unchanged() {
    let synth = TypeSynthesizer::new();
    let desc = wide_type(&synth);
    let inst = desc.construct(sample_values()).expect("construct");

    for (field, expected) in desc.fields().iter().zip(sample_values()) {
        assert_eq!(inst.get_field(field.name()).expect("field"), &expected);
    }
    assert_eq!(inst.into_values(), sample_values());
}

#[test]
fn equal_slots_mean_equal_instances_and_hashes() {
    let synth = TypeSynthesizer::new();
    let desc = wide_type(&synth);
    let a = desc.construct(sample_values()).expect("a");
    let b = desc.construct(sample_values()).expect("b");
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn changing_any_single_slot_breaks_equality() {
    let synth = TypeSynthesizer::new();
    let desc = wide_type(&synth);
    let base = desc.construct(sample_values()).expect("base");
    let replacements = [
        Value::from(false),
        Value::from(8u8),
        Value::from(3i16),
        Value::from(43u32),
        Value::from(0i64),
        Value::from(2.5f32),
        Value::from(0.25f64),
        Value::from('y'),
        Value::from("world"),
    ];

    for (index, replacement) in replacements.into_iter().enumerate() {
        let mut changed = base.clone();
        changed.set_at(index, replacement).expect("same type");
        assert_ne!(base, changed, "slot {} should matter", index);
    }
}

#[test]
fn hash_depends_on_field_names() {
    let synth = TypeSynthesizer::new();
    let a = synth
        .create_type([("Id", TypeTag::I32)])
        .expect("a")
        .construct([Value::from(1i32)])
        .expect("a");
    let b = synth
        .create_type([("Key", TypeTag::I32)])
        .expect("b")
        .construct([Value::from(1i32)])
        .expect("b");

    assert_ne!(a, b);
    assert_ne!(a.hash_code(), b.hash_code());
}

#[test]
fn positional_constructor_checks_each_argument() {
    let synth = TypeSynthesizer::new();
    let desc = wide_type(&synth);

    let mut values = sample_values();
    values.pop();
    assert_eq!(
        desc.construct(values).expect_err("short"),
        DynClassError::ArityMismatch {
            expected: 9,
            got: 8
        }
    );

    let mut values = sample_values();
    values[3] = Value::from(42i32);
    match desc.construct(values) {
        Err(DynClassError::TypeMismatch {
            field,
            expected,
            got,
        }) => {
            assert_eq!(field, "count");
            assert_eq!(expected, "u32");
            assert_eq!(got, "i32");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn rendering_follows_declaration_order() {
    let synth = TypeSynthesizer::new();
    let inst = synth
        .create_type([("b", TypeTag::I32), ("a", TypeTag::String)])
        .expect("valid schema")
        .construct([Value::from(2i32), Value::from("x")])
        .expect("construct");
    assert_eq!(inst.to_string(), "{b=2, a=x}");
}
