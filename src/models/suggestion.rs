use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: u64,
    pub place_name: String,
    pub category: String,
    pub description: String,
    #[serde(default = "anonymous")]
    pub your_name: String,
    pub timestamp: String,
    #[serde(default)]
    pub votes: u64,
}

/// Client-supplied fields for a new suggestion, before validation.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDraft {
    pub place_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub your_name: Option<String>,
}

/// A suggestion that passed validation but has not been given an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSuggestion {
    pub place_name: String,
    pub category: String,
    pub description: String,
    pub your_name: String,
}

impl Suggestion {
    pub fn from_new(id: u64, new_suggestion: NewSuggestion, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            place_name: new_suggestion.place_name,
            category: new_suggestion.category,
            description: new_suggestion.description,
            your_name: new_suggestion.your_name,
            timestamp: format_submission_date(created_at),
            votes: 0,
        }
    }
}

fn anonymous() -> String {
    ANONYMOUS.to_string()
}

/// Renders a date the way the front end displays it, e.g. `10/18/2026`.
pub fn format_submission_date(date: OffsetDateTime) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    date.format(&format)
        .unwrap_or_else(|_| date.date().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn submission_date_has_no_padding() {
        let date = datetime!(2026-03-07 12:00 UTC);
        assert_eq!(format_submission_date(date), "3/7/2026");
    }

    #[test]
    fn deserializes_camel_case_record_with_defaults() {
        let raw = r#"{
            "id": 42,
            "placeName": "Neon Museum",
            "category": "attraction",
            "description": "Old signs",
            "timestamp": "1/2/2025"
        }"#;
        let suggestion: Suggestion = serde_json::from_str(raw).unwrap();

        assert_eq!(suggestion.place_name, "Neon Museum");
        assert_eq!(suggestion.your_name, ANONYMOUS);
        assert_eq!(suggestion.votes, 0);
    }

    #[test]
    fn new_suggestion_starts_without_votes() {
        let new_suggestion = NewSuggestion {
            place_name: "Test Spot".to_string(),
            category: "bar".to_string(),
            description: "desc".to_string(),
            your_name: ANONYMOUS.to_string(),
        };
        let suggestion = Suggestion::from_new(7, new_suggestion, datetime!(2026-10-18 09:30 UTC));

        assert_eq!(suggestion.id, 7);
        assert_eq!(suggestion.votes, 0);
        assert_eq!(suggestion.timestamp, "10/18/2026");
    }
}
