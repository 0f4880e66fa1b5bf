use serde::{Deserialize, Serialize};
use crate::models::suggestion::Suggestion;
use crate::models::vote::VoteLedger;

/// Everything the store owns, in the layout written to the database file.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub user_votes: VoteLedger,
}

impl StoreSnapshot {
    pub fn find(&self, suggestion_id: u64) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == suggestion_id)
    }

    pub fn find_mut(&mut self, suggestion_id: u64) -> Option<&mut Suggestion> {
        self.suggestions.iter_mut().find(|s| s.id == suggestion_id)
    }

    pub fn max_id(&self) -> Option<u64> {
        self.suggestions.iter().map(|s| s.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_top_level_fields_default_to_empty() {
        let snapshot: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.suggestions.is_empty());
        assert!(snapshot.user_votes.votes_of("anyone").is_empty());
    }

    #[test]
    fn round_trips_through_persisted_layout() {
        let raw = r#"{
            "suggestions": [{
                "id": 1,
                "placeName": "Bellagio Fountains",
                "category": "attraction",
                "description": "Water show",
                "yourName": "Vegas Veteran",
                "timestamp": "10/18/2026",
                "votes": 2
            }],
            "userVotes": { "alice": [1], "bob": [1] }
        }"#;
        let snapshot: StoreSnapshot = serde_json::from_str(raw).unwrap();
        let reloaded: StoreSnapshot =
            serde_json::from_str(&serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

        assert_eq!(reloaded, snapshot);
        assert_eq!(reloaded.user_votes.voter_count(1), 2);
        assert_eq!(reloaded.max_id(), Some(1));
    }
}
