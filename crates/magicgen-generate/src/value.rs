use magicgen_core::{ChoiceList, Constant, FieldSpec, FieldType, Instruction};
use serde::{Serialize, Serializer};

use crate::random::{Clock, RandomSource};

/// Bounds used by a bare `int:rand`.
pub const DEFAULT_INT_MIN: i64 = 0;
pub const DEFAULT_INT_MAX: i64 = 10000;

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Text(String),
    Int(i64),
    /// Seconds since the Unix epoch.
    Timestamp(f64),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeneratedValue::Null => serializer.serialize_none(),
            GeneratedValue::Text(value) => serializer.serialize_str(value),
            GeneratedValue::Int(value) => serializer.serialize_i64(*value),
            GeneratedValue::Timestamp(value) => serializer.serialize_f64(*value),
        }
    }
}

/// Produce one value for a validated field.
pub fn generate_value<R, C>(field: &FieldSpec, rng: &mut R, clock: &C) -> GeneratedValue
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    if field.field_type == FieldType::Timestamp {
        return GeneratedValue::Timestamp(clock.now_epoch_seconds());
    }

    match &field.instruction {
        Instruction::Empty => match field.field_type {
            FieldType::Str => GeneratedValue::Text(String::new()),
            _ => GeneratedValue::Null,
        },
        Instruction::Rand => match field.field_type {
            FieldType::Str => GeneratedValue::Text(rng.uuid_v4().to_string()),
            _ => GeneratedValue::Int(rng.int_in_range(DEFAULT_INT_MIN, DEFAULT_INT_MAX)),
        },
        Instruction::RandRange { lower, upper } => {
            GeneratedValue::Int(rng.int_in_range(*lower, *upper))
        }
        Instruction::Choice { values } => pick(values, rng),
        Instruction::Constant { value } => match value {
            Constant::Str(value) => GeneratedValue::Text(value.clone()),
            Constant::Int(value) => GeneratedValue::Int(*value),
        },
    }
}

fn pick<R: RandomSource + ?Sized>(values: &ChoiceList, rng: &mut R) -> GeneratedValue {
    if values.is_empty() {
        return GeneratedValue::Null;
    }
    let index = rng.int_in_range(0, values.len() as i64 - 1) as usize;
    match values {
        ChoiceList::Str(items) => GeneratedValue::Text(items[index].clone()),
        ChoiceList::Int(items) => GeneratedValue::Int(items[index]),
    }
}
