use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::grammar::parse_field;
use crate::schema::{Schema, ValidatedSchema};

/// Validate a decoded JSON schema.
///
/// This checks:
/// - the schema is a non-empty object of string values
/// - every value follows `type:instruction`
/// - instructions are compatible with their type
///
/// Validation stops at the first invalid field in declaration order.
pub fn validate_schema(value: &Value) -> Result<ValidatedSchema> {
    let schema = Schema::from_value(value)?;
    validate(&schema)
}

/// Validate an already-shaped raw schema.
pub fn validate(schema: &Schema) -> Result<ValidatedSchema> {
    let mut fields = Vec::with_capacity(schema.len());
    let mut warnings = Vec::new();

    for (key, raw) in schema.entries() {
        let parsed = parse_field(key, raw)?;
        debug!(field = %key, field_type = %parsed.spec.field_type, "schema field validated");

        if let Some(warning) = parsed.warning {
            warn!(field = %warning.key, code = warning.code, "{}", warning.message);
            warnings.push(warning);
        }
        fields.push(parsed.spec);
    }

    Ok(ValidatedSchema { fields, warnings })
}
