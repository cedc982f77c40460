//! Two-pass reader for untyped JSON payloads.
//!
//! Every request-facing entity is built through [`Payload`]: first
//! [`Payload::require`] checks that all needed fields are present, then the
//! typed accessors check each field's JSON type. A payload that is missing a
//! field never reaches the type pass.

use serde_json::{Map, Value};

use crate::error::{Entity, ValidationError};

pub struct Payload<'a> {
    entity: Entity,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    /// A non-object payload behaves as if every field were absent.
    pub fn new(entity: Entity, value: &'a Value) -> Self {
        Self {
            entity,
            fields: value.as_object(),
        }
    }

    /// Presence pass. Falsy JSON (`null`, `""`, `false`, `0`) counts as
    /// absent; arrays and objects count as present and fail the type pass.
    pub fn require(&self, names: &[&str]) -> Result<(), ValidationError> {
        let all_present = names.iter().all(|name| match self.get(name) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(_) => true,
        });

        if all_present {
            Ok(())
        } else {
            Err(ValidationError::missing(self.entity))
        }
    }

    pub fn string(&self, name: &str) -> Result<String, ValidationError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(ValidationError::data_type(self.entity)),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(name))
    }
}

/// Presence check for constructors that already receive typed values.
pub(crate) fn ensure_present(entity: Entity, values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        Err(ValidationError::missing(entity))
    } else {
        Ok(())
    }
}
