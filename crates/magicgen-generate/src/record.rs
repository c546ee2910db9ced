use magicgen_core::ValidatedSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::random::{Clock, RandomSource};
use crate::value::{GeneratedValue, generate_value};

/// One generated record, fields in schema declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, GeneratedValue)>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Build one record by generating every field once.
pub fn generate_record<R, C>(schema: &ValidatedSchema, rng: &mut R, clock: &C) -> Record
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let fields = schema
        .fields
        .iter()
        .map(|field| (field.name.clone(), generate_value(field, rng, clock)))
        .collect();
    Record { fields }
}

/// Build `lines` independent records.
pub fn generate_batch<R, C>(
    schema: &ValidatedSchema,
    lines: u64,
    rng: &mut R,
    clock: &C,
) -> Vec<Record>
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    (0..lines)
        .map(|_| generate_record(schema, rng, clock))
        .collect()
}
