use crate::record::RecordEnvelope;
use serde_json::Value;
use tracing::{debug, warn};

/// How the partition key is derived from a record before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Key by product name. Keeps records for the same product on one
    /// partition, preserving their relative order.
    #[default]
    ProductName,
    /// Key by a dotted field path into the serialized envelope,
    /// e.g. `product.name` or `source.client_id`.
    FieldPath(String),
    /// Join several field paths with `:` into one key.
    Composite(Vec<String>),
    /// No key; the broker assigns partitions on its own.
    None,
}

impl KeyStrategy {
    pub fn extract_key(&self, envelope: &RecordEnvelope) -> Option<String> {
        match self {
            KeyStrategy::ProductName => Some(envelope.product.name.clone()),

            KeyStrategy::FieldPath(path) => {
                let record = project_envelope(envelope)?;
                extract_field_value(&record, path)
            }

            KeyStrategy::Composite(fields) => {
                let record = project_envelope(envelope)?;
                extract_composite_key(&record, fields)
            }

            KeyStrategy::None => None,
        }
    }
}

fn project_envelope(envelope: &RecordEnvelope) -> Option<Value> {
    match serde_json::to_value(envelope) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to project record for key extraction: {}", e);
            None
        }
    }
}

fn extract_field_value(record: &Value, field_path: &str) -> Option<String> {
    let mut current = record;

    for part in field_path.split('.') {
        match current.get(part) {
            Some(value) => current = value,
            None => {
                debug!("Field '{}' not found in record", part);
                return None;
            }
        }
    }

    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        _ => Some(current.to_string()),
    }
}

fn extract_composite_key(record: &Value, fields: &[String]) -> Option<String> {
    let mut key_parts = Vec::new();

    for field in fields {
        if let Some(value) = extract_field_value(record, field) {
            key_parts.push(value);
        } else {
            debug!("Missing field '{}' for composite key", field);
            return None;
        }
    }

    if key_parts.is_empty() {
        None
    } else {
        Some(key_parts.join(":"))
    }
}
