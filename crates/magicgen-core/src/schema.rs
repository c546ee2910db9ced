use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SchemaError};

/// Value type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Str,
    Int,
    Timestamp,
}

impl FieldType {
    /// Type tags accepted in schema values.
    pub const NAMES: [&'static str; 3] = ["str", "int", "timestamp"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Str => "str",
            FieldType::Int => "int",
            FieldType::Timestamp => "timestamp",
        }
    }

    /// Whether the bare `rand` instruction applies to this type.
    pub fn accepts_rand(&self) -> bool {
        matches!(self, FieldType::Str | FieldType::Int)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "str" => Ok(FieldType::Str),
            "int" => Ok(FieldType::Int),
            "timestamp" => Ok(FieldType::Timestamp),
            _ => Err(()),
        }
    }
}

/// Candidate values of an enumerated-list instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChoiceList {
    Str(Vec<String>),
    Int(Vec<i64>),
}

impl ChoiceList {
    pub fn len(&self) -> usize {
        match self {
            ChoiceList::Str(items) => items.len(),
            ChoiceList::Int(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Literal value of a constant instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Constant {
    Str(String),
    Int(i64),
}

/// Parsed generation instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// No instruction; also used for every timestamp field.
    Empty,
    /// Bare `rand`.
    Rand,
    /// `rand(lower, upper)`, inclusive on both ends.
    RandRange { lower: i64, upper: i64 },
    /// `[...]` list, one element picked per record.
    Choice { values: ChoiceList },
    /// Literal value repeated on every record.
    Constant { value: Constant },
}

/// One validated schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub instruction: Instruction,
}

/// Non-fatal finding produced during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaWarning {
    pub key: String,
    pub code: &'static str,
    pub message: String,
}

/// Raw schema: field names mapped to `type:instruction` strings, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<(String, String)>,
}

impl Schema {
    /// Build a raw schema from decoded JSON, checking only its shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| SchemaError::InvalidSchemaShape {
            found: json_kind(value).to_string(),
        })?;

        if object.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut entries = Vec::with_capacity(object.len());
        for (key, raw) in object {
            let raw = raw.as_str().ok_or_else(|| SchemaError::FieldNotString {
                key: key.clone(),
                found: json_kind(raw).to_string(),
            })?;
            entries.push((key.clone(), raw.to_string()));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Schema after grammar and semantic validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSchema {
    pub fields: Vec<FieldSpec>,
    pub warnings: Vec<SchemaWarning>,
}

impl ValidatedSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_declaration_order() {
        let schema = Schema::from_value(&json!({"z": "str:", "a": "int:", "m": "timestamp:"}))
            .expect("valid shape");
        let keys: Vec<&str> = schema.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_non_object_schema() {
        let err = Schema::from_value(&json!(["str:rand"])).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidSchemaShape {
                found: "array".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_string_field() {
        let err = Schema::from_value(&json!({"age": 42})).unwrap_err();
        assert_eq!(err.key(), Some("age"));
        assert_eq!(err.code(), "field_not_string");
    }

    #[test]
    fn parses_type_tags() {
        assert_eq!("int".parse::<FieldType>(), Ok(FieldType::Int));
        assert!("float".parse::<FieldType>().is_err());
        assert!(!FieldType::Timestamp.accepts_rand());
    }
}
