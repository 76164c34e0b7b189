//! Error types shared by the parsing and preprocessing layers.

/// Errors raised while turning raw records into [`IntervalRecord`]s.
///
/// The bucket range for a batch is computed from every record's dates, so a
/// malformed or inverted date aborts the whole batch rather than silently
/// dropping the record. Missing lookup names are the one recoverable case:
/// the row keeps participating in aggregation under an unresolved label.
///
/// [`IntervalRecord`]: crate::core::domain::IntervalRecord
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("malformed date in field '{field}': '{value}'")]
    MalformedDate { field: String, value: String },

    #[error("field '{field}' resolved to an empty relation")]
    EmptyRelation { field: String },

    #[error("record '{id}' has end date before start date")]
    InvertedInterval { id: String },

    #[error("no entry for key '{key}' in lookup table '{table}'")]
    MissingLookup { table: String, key: String },
}

impl NormalizeError {
    pub fn malformed_date(field: &str, value: &str) -> Self {
        NormalizeError::MalformedDate {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn empty_relation(field: &str) -> Self {
        NormalizeError::EmptyRelation {
            field: field.to_string(),
        }
    }
}
