use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// Which suggestions each user has voted for. Votes are permanent, so the
/// ledger only ever grows.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct VoteLedger {
    votes_by_user: BTreeMap<String, BTreeSet<u64>>,
}

impl VoteLedger {
    pub fn has_voted(&self, user_id: &str, suggestion_id: u64) -> bool {
        self.votes_by_user
            .get(user_id)
            .map_or(false, |votes| votes.contains(&suggestion_id))
    }

    /// Returns false when the pair was already recorded.
    pub fn record(&mut self, user_id: &str, suggestion_id: u64) -> bool {
        self.votes_by_user
            .entry(user_id.to_string())
            .or_default()
            .insert(suggestion_id)
    }

    pub fn votes_of(&self, user_id: &str) -> Vec<u64> {
        self.votes_by_user
            .get(user_id)
            .map(|votes| votes.iter().copied().collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn voter_count(&self, suggestion_id: u64) -> u64 {
        self.votes_by_user
            .values()
            .filter(|votes| votes.contains(&suggestion_id))
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_pair_once() {
        let mut ledger = VoteLedger::default();

        assert!(ledger.record("user1", 3));
        assert!(!ledger.record("user1", 3));
        assert!(ledger.record("user2", 3));

        assert!(ledger.has_voted("user1", 3));
        assert!(!ledger.has_voted("user1", 4));
        assert_eq!(ledger.voter_count(3), 2);
    }

    #[test]
    fn unknown_user_has_no_votes() {
        let ledger = VoteLedger::default();
        assert!(ledger.votes_of("nobody").is_empty());
    }

    #[test]
    fn serializes_as_plain_object_of_arrays() {
        let mut ledger = VoteLedger::default();
        ledger.record("user1", 9);
        ledger.record("user1", 2);

        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json, serde_json::json!({ "user1": [2, 9] }));

        let parsed: VoteLedger = serde_json::from_str(r#"{"user1": [9, 2, 9]}"#).unwrap();
        assert_eq!(parsed, ledger);
    }
}
