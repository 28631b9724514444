// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! dynclass-demo - Build a record type at runtime and instantiate it.
//!
//! Usage:
//!   dynclass-demo
//!   dynclass-demo --field Id:i32 --field Name:string 1 Teste
//!   dynclass-demo --field Id:i32 --repeat 4 7

use anyhow::{bail, Context};
use clap::Parser;
use dynclass::{DynClassError, FieldSpec, Schema, TypeSynthesizer, TypeTag, Value};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "dynclass-demo")]
#[command(about = "Build a record type at runtime and instantiate it")]
#[command(version)]
struct Args {
    /// Field as NAME:TYPE (repeatable, declaration order). Defaults to Id:i32 Name:string
    #[arg(short, long = "field", value_name = "NAME:TYPE")]
    fields: Vec<String>,

    /// Constructor arguments, one per field
    values: Vec<String>,

    /// Request the same schema this many times
    #[arg(long, default_value = "1")]
    repeat: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_field(spec: &str) -> anyhow::Result<FieldSpec> {
    let (name, ty) = spec
        .split_once(':')
        .with_context(|| format!("field '{}' is not NAME:TYPE", spec))?;
    let tag: TypeTag = ty.parse()?;
    Ok(FieldSpec::new(name.trim(), tag))
}

fn parse_value(field: &FieldSpec, text: &str) -> anyhow::Result<Value> {
    let ctx = || format!("cannot parse '{}' as {} for {}", text, field.tag(), field.name());
    let value = match field.tag() {
        TypeTag::Bool => Value::Bool(text.parse().with_context(ctx)?),
        TypeTag::U8 => Value::U8(text.parse().with_context(ctx)?),
        TypeTag::U16 => Value::U16(text.parse().with_context(ctx)?),
        TypeTag::U32 => Value::U32(text.parse().with_context(ctx)?),
        TypeTag::U64 => Value::U64(text.parse().with_context(ctx)?),
        TypeTag::I8 => Value::I8(text.parse().with_context(ctx)?),
        TypeTag::I16 => Value::I16(text.parse().with_context(ctx)?),
        TypeTag::I32 => Value::I32(text.parse().with_context(ctx)?),
        TypeTag::I64 => Value::I64(text.parse().with_context(ctx)?),
        TypeTag::F32 => Value::F32(text.parse().with_context(ctx)?),
        TypeTag::F64 => Value::F64(text.parse().with_context(ctx)?),
        TypeTag::Char => Value::Char(text.parse().with_context(ctx)?),
        TypeTag::String => Value::String(text.to_string()),
        TypeTag::Record(_) => bail!("record fields cannot be given on the command line"),
    };
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();

    let fields = if args.fields.is_empty() {
        vec![
            FieldSpec::new("Id", TypeTag::I32),
            FieldSpec::new("Name", TypeTag::String),
        ]
    } else {
        args.fields
            .iter()
            .map(|spec| parse_field(spec))
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    let schema = Schema::new(fields)?;

    let synth = TypeSynthesizer::new();
    let desc = synth.get_or_create(&schema);

    let repeat = args.repeat.max(1);
    let identical = (1..repeat).all(|_| Arc::ptr_eq(&desc, &synth.get_or_create(&schema)));
    debug!("{} request(s), cache stats {:?}", repeat, synth.stats());

    println!("Type: {}", desc.name());
    println!("Number of properties: {}", desc.field_count());
    for field in desc.fields() {
        println!("  {}: {}", field.name(), field.tag());
    }
    if repeat > 1 {
        println!("Same type on all {} requests: {}", repeat, identical);
    }

    let instance = if args.values.is_empty() {
        desc.instantiate()
    } else {
        if args.values.len() != desc.field_count() {
            return Err(DynClassError::ArityMismatch {
                expected: desc.field_count(),
                got: args.values.len(),
            }
            .into());
        }
        let values = desc
            .fields()
            .iter()
            .zip(&args.values)
            .map(|(field, text)| parse_value(field, text))
            .collect::<anyhow::Result<Vec<_>>>()?;
        desc.construct(values)?
    };
    info!("constructed {}", desc.name());

    println!("Instance: {}", instance);
    println!("Hash code: {}", instance.hash_code());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(tag: TypeTag) -> FieldSpec {
        FieldSpec::new("f", tag)
    }

    #[test]
    fn test_parse_field() {
        let id = parse_field("Id:i32").expect("Id:i32");
        assert_eq!(id.name(), "Id");
        assert_eq!(id.tag(), &TypeTag::I32);

        let name = parse_field(" Name : string ").expect("padded");
        assert_eq!(name.name(), "Name");
        assert_eq!(name.tag(), &TypeTag::String);
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(parse_field("Id").is_err());

        let err = parse_field("Id:decimal").expect_err("unknown type");
        assert!(matches!(
            err.downcast_ref::<DynClassError>(),
            Some(DynClassError::UnknownType(_))
        ));
    }

    #[test]
    fn test_parse_value_primitives() {
        let cases = [
            (TypeTag::Bool, "true", Value::Bool(true)),
            (TypeTag::U8, "7", Value::U8(7)),
            (TypeTag::U16, "700", Value::U16(700)),
            (TypeTag::U32, "70000", Value::U32(70_000)),
            (TypeTag::U64, "7000000000", Value::U64(7_000_000_000)),
            (TypeTag::I8, "-7", Value::I8(-7)),
            (TypeTag::I16, "-700", Value::I16(-700)),
            (TypeTag::I32, "1", Value::I32(1)),
            (TypeTag::I64, "-7000000000", Value::I64(-7_000_000_000)),
            (TypeTag::F32, "1.5", Value::F32(1.5)),
            (TypeTag::F64, "-0.25", Value::F64(-0.25)),
            (TypeTag::Char, "z", Value::Char('z')),
            (TypeTag::String, "Teste", Value::from("Teste")),
        ];

        for (tag, text, expected) in cases {
            let parsed = parse_value(&field(tag.clone()), text).expect("parse");
            assert_eq!(parsed, expected, "tag {}", tag);
        }
    }

    #[test]
    fn test_parse_value_rejects_bad_input() {
        assert!(parse_value(&field(TypeTag::I32), "x").is_err());
        assert!(parse_value(&field(TypeTag::Char), "ab").is_err());

        let synth = TypeSynthesizer::new();
        let point = synth
            .create_type([("x", TypeTag::I32)])
            .expect("valid schema");
        assert!(parse_value(&field(TypeTag::Record(point)), "{x=1}").is_err());
    }
}
