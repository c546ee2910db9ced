//! Parser for the `type:instruction` mini-language of schema values.
//!
//! Instruction shapes are tried in a fixed order and the first match wins:
//! empty, `rand`, `rand(lower, upper)`, `[...]` list, then constant.
//! Timestamp fields short-circuit before any of them.

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::schema::{ChoiceList, Constant, FieldSpec, FieldType, Instruction, SchemaWarning};

const RAND: &str = "rand";
const RAND_RANGE_OPEN: &str = "rand(";

/// Outcome of parsing one schema value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub spec: FieldSpec,
    pub warning: Option<SchemaWarning>,
}

/// Split a raw value on its first colon into trimmed type and instruction.
pub fn split_type_instruction<'a>(key: &str, raw: &'a str) -> Result<(&'a str, &'a str)> {
    let (type_part, instruction) = raw.split_once(':').ok_or_else(|| SchemaError::MissingColon {
        key: key.to_string(),
        raw: raw.to_string(),
    })?;
    Ok((type_part.trim(), instruction.trim()))
}

/// Parse and validate one schema field.
pub fn parse_field(key: &str, raw: &str) -> Result<ParsedField> {
    let (type_part, instruction) = split_type_instruction(key, raw)?;

    let field_type: FieldType = type_part.parse().map_err(|_| SchemaError::InvalidType {
        key: key.to_string(),
        raw: raw.to_string(),
        type_part: type_part.to_string(),
    })?;

    if field_type == FieldType::Timestamp {
        let warning = (!instruction.is_empty()).then(|| SchemaWarning {
            key: key.to_string(),
            code: "timestamp_instruction_ignored",
            message: format!(
                "timestamp type does not accept instructions; '{instruction}' will be ignored"
            ),
        });
        return Ok(ParsedField {
            spec: spec(key, field_type, Instruction::Empty),
            warning,
        });
    }

    let parsed = parse_instruction(key, raw, field_type, instruction)?;
    Ok(ParsedField {
        spec: spec(key, field_type, parsed),
        warning: None,
    })
}

fn parse_instruction(
    key: &str,
    raw: &str,
    field_type: FieldType,
    instruction: &str,
) -> Result<Instruction> {
    if instruction.is_empty() {
        return Ok(Instruction::Empty);
    }

    if instruction == RAND {
        if !field_type.accepts_rand() {
            return Err(unsupported(key, raw, field_type, RAND));
        }
        return Ok(Instruction::Rand);
    }

    if instruction.starts_with(RAND_RANGE_OPEN) && instruction.ends_with(')') {
        if field_type != FieldType::Int {
            return Err(unsupported(key, raw, field_type, "rand(from, to)"));
        }
        let inner = &instruction[RAND_RANGE_OPEN.len()..instruction.len() - 1];
        let (lower, upper) = parse_range_bounds(inner).ok_or_else(|| {
            SchemaError::MalformedRange {
                key: key.to_string(),
                raw: raw.to_string(),
            }
        })?;
        if lower > upper {
            return Err(SchemaError::InvertedRange {
                key: key.to_string(),
                raw: raw.to_string(),
                lower,
                upper,
            });
        }
        return Ok(Instruction::RandRange { lower, upper });
    }

    if instruction.starts_with('[') && instruction.ends_with(']') {
        let values = parse_choice_list(key, raw, field_type, instruction)?;
        return Ok(Instruction::Choice { values });
    }

    parse_constant(key, raw, field_type, instruction)
}

/// Exactly two comma-separated integers, whitespace tolerated.
fn parse_range_bounds(inner: &str) -> Option<(i64, i64)> {
    let mut tokens = inner.split(',');
    let lower = tokens.next()?.trim().parse::<i64>().ok()?;
    let upper = tokens.next()?.trim().parse::<i64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((lower, upper))
}

fn parse_choice_list(
    key: &str,
    raw: &str,
    field_type: FieldType,
    instruction: &str,
) -> Result<ChoiceList> {
    let malformed = || SchemaError::MalformedList {
        key: key.to_string(),
        raw: raw.to_string(),
    };
    let normalized = instruction.replace('\'', "\"");
    let parsed: Value = serde_json::from_str(&normalized).map_err(|_| malformed())?;
    let Value::Array(items) = parsed else {
        return Err(malformed());
    };
    if items.is_empty() {
        return Err(SchemaError::EmptyList {
            key: key.to_string(),
            raw: raw.to_string(),
        });
    }

    let mismatch = |expected: &'static str| SchemaError::ListTypeMismatch {
        key: key.to_string(),
        raw: raw.to_string(),
        expected,
    };

    match field_type {
        FieldType::Str => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(ChoiceList::Str)
            .ok_or_else(|| mismatch("strings")),
        FieldType::Int => items
            .iter()
            .map(Value::as_i64)
            .collect::<Option<Vec<_>>>()
            .map(ChoiceList::Int)
            .ok_or_else(|| mismatch("integers")),
        FieldType::Timestamp => Err(unsupported(key, raw, field_type, "[...]")),
    }
}

fn parse_constant(
    key: &str,
    raw: &str,
    field_type: FieldType,
    instruction: &str,
) -> Result<Instruction> {
    match field_type {
        FieldType::Str => {
            // A bare `rand` here means the colon split left an unexpected residual.
            if instruction == RAND {
                return Err(SchemaError::MissingColon {
                    key: key.to_string(),
                    raw: raw.to_string(),
                });
            }
            Ok(Instruction::Constant {
                value: Constant::Str(instruction.to_string()),
            })
        }
        FieldType::Int => instruction
            .parse::<i64>()
            .map(|value| Instruction::Constant {
                value: Constant::Int(value),
            })
            .map_err(|_| SchemaError::InvalidConstant {
                key: key.to_string(),
                raw: raw.to_string(),
                constant: instruction.to_string(),
            }),
        FieldType::Timestamp => Ok(Instruction::Empty),
    }
}

fn unsupported(key: &str, raw: &str, field_type: FieldType, instruction: &str) -> SchemaError {
    SchemaError::UnsupportedInstruction {
        key: key.to_string(),
        raw: raw.to_string(),
        type_part: field_type.to_string(),
        instruction: instruction.to_string(),
    }
}

fn spec(key: &str, field_type: FieldType, instruction: Instruction) -> FieldSpec {
    FieldSpec {
        name: key.to_string(),
        field_type,
        instruction,
    }
}
