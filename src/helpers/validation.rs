use thiserror::Error;
use crate::models::suggestion::{NewSuggestion, SuggestionDraft, ANONYMOUS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed {field}: {value:?}")]
    MalformedIdentifier { field: &'static str, value: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Trims `value` and rejects it when nothing is left.
pub fn required(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

pub fn optional_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => default.to_string(),
    }
}

pub fn parse_suggestion_id(raw: &str) -> Result<u64, ValidationError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::MalformedIdentifier {
            field: "suggestionId",
            value: raw.to_string(),
        })
}

pub fn new_suggestion(draft: &SuggestionDraft) -> Result<NewSuggestion, ValidationError> {
    Ok(NewSuggestion {
        place_name: required("placeName", draft.place_name.as_deref())?,
        category: required("category", draft.category.as_deref())?,
        description: required("description", draft.description.as_deref())?,
        your_name: optional_or(draft.your_name.as_deref(), ANONYMOUS),
    })
}
