//! Typed field mapping from untyped JSON objects.
//!
//! Catalog records and request bodies arrive as loose JSON maps. [`hydrate`] reads the fields
//! an entity declares in its [`FieldSpec`] list, coercing each value to its declared type.
//! Values which cannot be coerced are dropped and reported in [`Hydrated::rejected`] instead of
//! failing the whole record; keys the entity does not declare are ignored. Text longer than its
//! column allows is rejected the same way.
//!
//! Dropping a field can leave a required column without a value. [`FieldReader`] is the second
//! step: it pulls every required field out of a [`Hydrated`] record and reports all the missing
//! ones at once, so a partially hydrated record never reaches the database.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// Declared storage type of a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Text column holding at most this many characters
    Text(usize),
    /// 32-bit integer column
    Integer,
    /// 64-bit integer column
    BigInteger,
}

/// Name and declared type of a field on an entity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub const fn text(name: &'static str, max_len: usize) -> Self {
        Self {
            name,
            field_type: FieldType::Text(max_len),
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Integer,
        }
    }

    pub const fn big_integer(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::BigInteger,
        }
    }
}

/// A successfully coerced value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// A field that was present but could not be coerced to its declared type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedField {
    pub name: String,
    pub reason: String,
}

/// Result of hydrating a JSON object against an entity's field list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hydrated {
    accepted: BTreeMap<&'static str, FieldValue>,
    rejected: Vec<RejectedField>,
}

impl Hydrated {
    /// Fields that were present but dropped, in declaration order
    pub fn rejected(&self) -> &[RejectedField] {
        &self.rejected
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.accepted.get(name)
    }

    /// Starts reading required fields out of this record
    pub fn reader(&self) -> FieldReader<'_> {
        FieldReader {
            hydrated: self,
            missing: Vec::new(),
        }
    }
}

/// Coerces the declared fields of `fields` to their declared types.
///
/// # Arguments
/// - `schema` - Field declarations of the target entity
/// - `fields` - Untyped JSON object to read from
///
/// # Returns
/// A [`Hydrated`] record holding the accepted values and the names and reasons of the
/// rejected ones. Declared fields absent from `fields` appear in neither list.
pub fn hydrate(schema: &[FieldSpec], fields: &Map<String, Value>) -> Hydrated {
    let mut hydrated = Hydrated::default();

    for spec in schema {
        let Some(value) = fields.get(spec.name) else {
            continue;
        };

        match coerce(spec.field_type, value) {
            Ok(value) => {
                hydrated.accepted.insert(spec.name, value);
            }
            Err(reason) => {
                tracing::debug!(field = spec.name, %reason, "Ignoring field that failed coercion");

                hydrated.rejected.push(RejectedField {
                    name: spec.name.to_string(),
                    reason,
                });
            }
        }
    }

    hydrated
}

fn coerce(field_type: FieldType, value: &Value) -> Result<FieldValue, String> {
    match field_type {
        FieldType::Text(max_len) => {
            let text = coerce_text(value)?;
            let len = text.chars().count();
            if len > max_len {
                return Err(format!("{} characters exceeds the limit of {}", len, max_len));
            }
            Ok(FieldValue::Text(text))
        }
        FieldType::Integer => {
            let integer = coerce_integer(value)?;
            i32::try_from(integer)
                .map(|_| FieldValue::Integer(integer))
                .map_err(|_| format!("{} is out of range for a 32-bit integer", integer))
        }
        FieldType::BigInteger => coerce_integer(value).map(FieldValue::Integer),
    }
}

fn coerce_text(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err("expected text but found null".to_string()),
        Value::Array(_) => Err("expected text but found an array".to_string()),
        Value::Object(_) => Err("expected text but found an object".to_string()),
    }
}

fn coerce_integer(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => {
            if let Some(integer) = n.as_i64() {
                return Ok(integer);
            }

            match n.as_f64() {
                Some(float) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => {
                    Ok(float as i64)
                }
                _ => Err(format!("{} is not an integer", n)),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("\"{}\" is not an integer", s)),
        Value::Null => Err("expected an integer but found null".to_string()),
        Value::Bool(_) => Err("expected an integer but found a boolean".to_string()),
        Value::Array(_) => Err("expected an integer but found an array".to_string()),
        Value::Object(_) => Err("expected an integer but found an object".to_string()),
    }
}

/// Reads required fields out of a [`Hydrated`] record, collecting every missing name.
///
/// Accessors return a placeholder for missing fields so a whole struct can be built in one
/// expression; [`FieldReader::finish`] then fails if anything was missing. Blank text counts as
/// missing.
pub struct FieldReader<'a> {
    hydrated: &'a Hydrated,
    missing: Vec<String>,
}

impl<'a> FieldReader<'a> {
    pub fn text(&mut self, name: &'static str) -> String {
        match self.hydrated.get(name) {
            Some(FieldValue::Text(value)) if !value.trim().is_empty() => value.clone(),
            _ => {
                self.missing.push(name.to_string());
                String::new()
            }
        }
    }

    pub fn integer(&mut self, name: &'static str) -> i32 {
        match self.hydrated.get(name) {
            Some(FieldValue::Integer(value)) => match i32::try_from(*value) {
                Ok(value) => value,
                Err(_) => {
                    self.missing.push(name.to_string());
                    0
                }
            },
            _ => {
                self.missing.push(name.to_string());
                0
            }
        }
    }

    pub fn big_integer(&mut self, name: &'static str) -> i64 {
        match self.hydrated.get(name) {
            Some(FieldValue::Integer(value)) => *value,
            _ => {
                self.missing.push(name.to_string());
                0
            }
        }
    }

    /// Returns `ValidationError::MissingFields` listing every field that could not be read
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}
