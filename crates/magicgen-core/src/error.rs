use std::path::PathBuf;

use thiserror::Error;

/// Grammar and semantic errors raised while validating a schema.
///
/// Field-scoped variants carry the offending key and the raw value exactly
/// as the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema object has no fields.
    #[error("data schema cannot be empty")]
    EmptySchema,
    /// The schema is not a JSON object.
    #[error("invalid data schema format: expected a JSON object, found {found}")]
    InvalidSchemaShape { found: String },
    /// A field value is not a JSON string.
    #[error("schema value for key '{key}' must be a string, found {found}")]
    FieldNotString { key: String, found: String },
    /// The value has no `type:instruction` separator.
    #[error("schema value '{raw}' for key '{key}' must contain a colon (type:instruction)")]
    MissingColon { key: String, raw: String },
    /// The type tag is not one of the supported types.
    #[error("invalid type '{type_part}' in key '{key}' (value: '{raw}')")]
    InvalidType {
        key: String,
        raw: String,
        type_part: String,
    },
    /// The instruction is not allowed for the declared type.
    #[error("'{instruction}' instruction is not valid for type '{type_part}' (key '{key}', value '{raw}')")]
    UnsupportedInstruction {
        key: String,
        raw: String,
        type_part: String,
        instruction: String,
    },
    /// `rand(lower, upper)` without exactly two integer bounds.
    #[error("invalid format in rand(from, to) at key '{key}' (value: '{raw}')")]
    MalformedRange { key: String, raw: String },
    /// `rand(lower, upper)` with `lower > upper`.
    #[error("invalid range rand({lower}, {upper}) in key '{key}': lower bound exceeds upper bound")]
    InvertedRange {
        key: String,
        raw: String,
        lower: i64,
        upper: i64,
    },
    /// A `[...]` instruction that is not a JSON array.
    #[error("list instruction in key '{key}' must be a valid JSON array (value: '{raw}')")]
    MalformedList { key: String, raw: String },
    /// A `[]` list with nothing to pick from.
    #[error("list instruction in key '{key}' must not be empty (value: '{raw}')")]
    EmptyList { key: String, raw: String },
    /// A list element does not match the declared type.
    #[error("all elements in list for key '{key}' must be {expected} (value: '{raw}')")]
    ListTypeMismatch {
        key: String,
        raw: String,
        expected: &'static str,
    },
    /// A constant that cannot be read as the declared type.
    #[error("invalid constant '{constant}' in key '{key}' (value: '{raw}')")]
    InvalidConstant {
        key: String,
        raw: String,
        constant: String,
    },
}

impl SchemaError {
    /// Key of the offending field, when the error is field-scoped.
    pub fn key(&self) -> Option<&str> {
        match self {
            SchemaError::EmptySchema | SchemaError::InvalidSchemaShape { .. } => None,
            SchemaError::FieldNotString { key, .. }
            | SchemaError::MissingColon { key, .. }
            | SchemaError::InvalidType { key, .. }
            | SchemaError::UnsupportedInstruction { key, .. }
            | SchemaError::MalformedRange { key, .. }
            | SchemaError::InvertedRange { key, .. }
            | SchemaError::MalformedList { key, .. }
            | SchemaError::EmptyList { key, .. }
            | SchemaError::ListTypeMismatch { key, .. }
            | SchemaError::InvalidConstant { key, .. } => Some(key),
        }
    }

    /// Stable machine-readable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::EmptySchema => "empty_schema",
            SchemaError::InvalidSchemaShape { .. } => "invalid_schema_shape",
            SchemaError::FieldNotString { .. } => "field_not_string",
            SchemaError::MissingColon { .. } => "missing_colon",
            SchemaError::InvalidType { .. } => "invalid_type",
            SchemaError::UnsupportedInstruction { .. } => "unsupported_instruction",
            SchemaError::MalformedRange { .. } => "malformed_range",
            SchemaError::InvertedRange { .. } => "inverted_range",
            SchemaError::MalformedList { .. } => "malformed_list",
            SchemaError::EmptyList { .. } => "empty_list",
            SchemaError::ListTypeMismatch { .. } => "list_type_mismatch",
            SchemaError::InvalidConstant { .. } => "invalid_constant",
        }
    }

    /// Remediation hint describing the expected grammar.
    pub fn hint(&self) -> String {
        match self {
            SchemaError::EmptySchema => {
                "declare at least one field, e.g. {\"name\": \"str:rand\"}".to_string()
            }
            SchemaError::InvalidSchemaShape { .. } => {
                "the schema must be a JSON object mapping field names to \"type:instruction\" strings"
                    .to_string()
            }
            SchemaError::FieldNotString { .. } | SchemaError::MissingColon { .. } => {
                "use the form type:instruction, e.g. \"int:rand(1, 100)\" or \"str:\"".to_string()
            }
            SchemaError::InvalidType { .. } => {
                format!("supported types: {}", crate::schema::FieldType::NAMES.join(", "))
            }
            SchemaError::UnsupportedInstruction { instruction, .. } => {
                if instruction == "rand" {
                    "'rand' is only valid for str or int".to_string()
                } else {
                    "rand(from, to) is only valid for the int type".to_string()
                }
            }
            SchemaError::MalformedRange { .. } => {
                "expected two integer bounds, e.g. int:rand(1, 90)".to_string()
            }
            SchemaError::InvertedRange { .. } => {
                "the lower bound must not exceed the upper bound".to_string()
            }
            SchemaError::MalformedList { .. } => {
                "use JSON array syntax with quoted strings, e.g. str:['client', 'partner']"
                    .to_string()
            }
            SchemaError::EmptyList { .. } => {
                "list at least one value, e.g. int:[1, 2, 3]".to_string()
            }
            SchemaError::ListTypeMismatch { expected, .. } => {
                format!("every list element must be {expected}")
            }
            SchemaError::InvalidConstant { .. } => {
                "int constants must be base-10 integers, e.g. int:42".to_string()
            }
        }
    }
}

/// Errors raised while resolving the schema argument into JSON.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read schema file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema file '{}' is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON schema file not found: {} (current directory: {cwd})", path.display())]
    NotFound { path: PathBuf, cwd: String },
    #[error("failed to parse schema as JSON string: {0}")]
    InvalidInline(#[source] serde_json::Error),
}

impl SourceError {
    /// Remediation hint for the user.
    pub fn hint(&self) -> &'static str {
        match self {
            SourceError::Io { .. } => "check that the schema file is readable",
            SourceError::InvalidJson { .. } => "the schema file must contain a single JSON object",
            SourceError::NotFound { .. } => {
                "pass an existing schema file or an inline JSON object"
            }
            SourceError::InvalidInline(_) => {
                "make sure to properly escape quotes in command line JSON"
            }
        }
    }
}

/// Result type for schema validation.
pub type Result<T> = std::result::Result<T, SchemaError>;
