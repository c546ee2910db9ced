//! Schema contracts for magicgen.
//!
//! This crate parses and validates the `type:instruction` schema language
//! and resolves the schema argument into JSON. It performs no writes.

pub mod error;
pub mod grammar;
pub mod schema;
pub mod source;
pub mod validation;

pub use error::{Result, SchemaError, SourceError};
pub use grammar::{ParsedField, parse_field, split_type_instruction};
pub use schema::{
    ChoiceList, Constant, FieldSpec, FieldType, Instruction, Schema, SchemaWarning,
    ValidatedSchema,
};
pub use source::load_schema_source;
pub use validation::{validate, validate_schema};
