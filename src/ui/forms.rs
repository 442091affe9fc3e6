//! Text-input form state for department submissions.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::error::{AppError, Result};
use crate::models::{Department, FieldKind};

/// Raw text inputs for one department card, keyed by schema field.
#[derive(Debug, Clone, Default)]
pub struct DepartmentForm {
    pub inputs: BTreeMap<&'static str, String>,
    /// Last parse or submission error shown under the card.
    pub error: Option<String>,
}

impl DepartmentForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mutable text buffer for field `key`.
    pub fn input_mut(&mut self, key: &'static str) -> &mut String {
        self.inputs.entry(key).or_default()
    }

    /// Build a JSON payload from the filled-in fields. Blank fields are omitted.
    pub fn to_payload(&self, department: Department) -> Result<Value> {
        let mut map = Map::new();

        for spec in department.fields() {
            let Some(raw) = self.inputs.get(spec.key) else {
                continue;
            };
            let raw = raw.trim().replace(',', "");
            if raw.is_empty() {
                continue;
            }

            let number = match spec.kind {
                FieldKind::Count => raw
                    .parse::<u64>()
                    .map(Number::from)
                    .map_err(|_| AppError::validation(format!("{} must be a whole number", spec.label)))?,
                FieldKind::Amount => raw
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .ok_or_else(|| AppError::validation(format!("{} must be a number", spec.label)))?,
            };
            map.insert(spec.key.to_string(), Value::Number(number));
        }

        Ok(Value::Object(map))
    }
}
