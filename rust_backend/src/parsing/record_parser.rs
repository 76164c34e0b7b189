use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::domain::Relation;
use crate::core::error::NormalizeError;

/// Date format used by the planning base for all date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw record fetched from the planning base: an opaque record id plus
/// a map of named field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Batch payloads arrive either as a bare array of records or wrapped in a
/// `{"records": [...]}` envelope, depending on the fetch path.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchShape {
    Wrapped { records: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

/// Parse a JSON record batch, reporting the JSON path on failure.
pub fn parse_record_batch_str(json_str: &str) -> Result<Vec<RawRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);
    let shape: BatchShape = serde_path_to_error::deserialize(&mut deserializer)
        .context("Failed to parse record batch")?;

    Ok(match shape {
        BatchShape::Wrapped { records } => records,
        BatchShape::Bare(records) => records,
    })
}

/// Outcome of the first-of-list normalization for a single field.
enum FirstValue<'a> {
    /// Field absent or null.
    Absent,
    /// Field present as an explicitly empty list.
    EmptyList,
    Scalar(&'a Value),
}

impl RawRecord {
    /// First-of-list normalization: scalars pass through unchanged, lists
    /// yield their first element, an empty list is kept distinct from an
    /// absent field so required-field accessors can report it.
    fn first_value(&self, field: &str) -> FirstValue<'_> {
        match self.fields.get(field) {
            None | Some(Value::Null) => FirstValue::Absent,
            Some(Value::Array(items)) => match items.first() {
                Some(first) => FirstValue::Scalar(first),
                None => FirstValue::EmptyList,
            },
            Some(value) => FirstValue::Scalar(value),
        }
    }

    /// Linked-field value with its full shape preserved.
    pub fn relation(&self, field: &str) -> Relation {
        match self.fields.get(field) {
            None | Some(Value::Null) => Relation::Unresolved,
            Some(Value::String(key)) => Relation::One(key.clone()),
            Some(Value::Array(items)) => {
                let keys: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                match keys.len() {
                    0 => Relation::Unresolved,
                    1 => Relation::One(keys.into_iter().next().unwrap_or_default()),
                    _ => Relation::Many(keys),
                }
            }
            Some(other) => Relation::One(other.to_string()),
        }
    }

    /// Optional string field; absent and empty-list both normalize to `None`.
    pub fn string(&self, field: &str) -> Option<String> {
        match self.first_value(field) {
            FirstValue::Scalar(Value::String(s)) => Some(s.clone()),
            FirstValue::Scalar(other) => Some(other.to_string()),
            _ => None,
        }
    }

    /// Optional numeric field; accepts numbers and numeric strings, which is
    /// how the base serves computed columns.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.first_value(field) {
            FirstValue::Scalar(Value::Number(n)) => n.as_f64(),
            FirstValue::Scalar(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Numeric field defaulting to 0.0 when absent (probability, renewal).
    pub fn number_or_zero(&self, field: &str) -> f64 {
        self.number(field).unwrap_or(0.0)
    }

    /// Optional date field in [`DATE_FORMAT`]. A present but unparseable
    /// value is malformed data, not an absent field.
    pub fn date(&self, field: &str) -> Result<Option<NaiveDate>, NormalizeError> {
        let raw = match self.first_value(field) {
            FirstValue::Absent | FirstValue::EmptyList => return Ok(None),
            FirstValue::Scalar(Value::String(s)) => s.clone(),
            FirstValue::Scalar(other) => other.to_string(),
        };

        // Datetime-shaped values keep their date part.
        let date_part = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Some)
            .map_err(|_| NormalizeError::malformed_date(field, &raw))
    }

    /// Required date field: absent or explicitly-empty values fail with
    /// [`NormalizeError::EmptyRelation`] since the batch bucket range cannot
    /// be computed without them.
    pub fn required_date(&self, field: &str) -> Result<NaiveDate, NormalizeError> {
        self.date(field)?
            .ok_or_else(|| NormalizeError::empty_relation(field))
    }

    /// Optional boolean field (checkbox columns arrive as true or absent).
    pub fn boolean(&self, field: &str) -> bool {
        matches!(self.first_value(field), FirstValue::Scalar(Value::Bool(true)))
    }
}
