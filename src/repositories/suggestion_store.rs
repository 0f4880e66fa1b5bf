use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;
use crate::error::{PersistenceError, SuggestionError};
use crate::helpers::validation;
use crate::models::snapshot::StoreSnapshot;
use crate::models::suggestion::{Suggestion, SuggestionDraft};
use crate::repositories::default_catalog::default_catalog;
use crate::repositories::persistence::Persistence;

/// Single owner of suggestions and the vote ledger.
///
/// Every mutation runs under one lock and is staged on a copy of the
/// state; the copy only replaces the live state once the backend accepted
/// it, so a failed write is never observable.
pub struct SuggestionStore {
    state: Mutex<StoreSnapshot>,
    persistence: Persistence,
}

impl SuggestionStore {
    pub fn new(
        snapshot: StoreSnapshot,
        persistence: Persistence,
    ) -> Self {
        Self {
            state: Mutex::new(snapshot),
            persistence,
        }
    }

    /// Loads the previous state from `persistence`, or seeds and saves the
    /// default catalog when there is none.
    pub async fn open(persistence: Persistence) -> Result<Self, PersistenceError> {
        let snapshot = match persistence.load().await? {
            Some(snapshot) => {
                info!(
                    "Loaded {} suggestions from {}",
                    snapshot.suggestions.len(),
                    persistence.describe()
                );
                snapshot
            }
            None => {
                let seeded = default_catalog(OffsetDateTime::now_utc());
                persistence.save(&seeded).await?;
                info!("Database initialized with default data ({})", persistence.describe());
                seeded
            }
        };

        Ok(Self::new(snapshot, persistence))
    }

    pub async fn list_suggestions(&self) -> Vec<Suggestion> {
        self.state.lock().await.suggestions.clone()
    }

    pub async fn create_suggestion(
        &self,
        draft: &SuggestionDraft,
    ) -> Result<Suggestion, SuggestionError> {
        let new_suggestion = validation::new_suggestion(draft)?;
        let now = OffsetDateTime::now_utc();

        let mut state = self.state.lock().await;
        let mut staged = state.clone();
        let id = next_id(&staged, now).ok_or(SuggestionError::IdSpaceExhausted)?;
        let suggestion = Suggestion::from_new(id, new_suggestion, now);
        staged.suggestions.insert(0, suggestion.clone());
        self.commit(&mut state, staged).await?;

        info!("Added suggestion {} ({})", suggestion.id, suggestion.place_name);
        Ok(suggestion)
    }

    pub async fn cast_vote(
        &self,
        suggestion_id: u64,
        user_id: &str,
    ) -> Result<Suggestion, SuggestionError> {
        let user_id = validation::required("userId", Some(user_id))?;

        let mut state = self.state.lock().await;
        if state.user_votes.has_voted(&user_id, suggestion_id) {
            return Err(SuggestionError::DuplicateVote {
                user_id,
                suggestion_id,
            });
        }
        if state.find(suggestion_id).is_none() {
            return Err(SuggestionError::NotFound { suggestion_id });
        }

        let mut staged = state.clone();
        let updated = match staged.find_mut(suggestion_id) {
            Some(suggestion) => {
                suggestion.votes = suggestion.votes
                    .checked_add(1)
                    .ok_or(SuggestionError::VoteCountExhausted { suggestion_id })?;
                suggestion.clone()
            }
            None => return Err(SuggestionError::NotFound { suggestion_id }),
        };
        staged.user_votes.record(&user_id, suggestion_id);
        self.commit(&mut state, staged).await?;

        info!("User {} voted for suggestion {}, now at {}", user_id, suggestion_id, updated.votes);
        Ok(updated)
    }

    /// Ids the user voted for, empty when the user never voted.
    pub async fn user_votes(&self, user_id: &str) -> Vec<u64> {
        self.state.lock().await.user_votes.votes_of(user_id.trim())
    }

    #[cfg(test)]
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.lock().await.clone()
    }

    async fn commit(
        &self,
        state: &mut StoreSnapshot,
        staged: StoreSnapshot,
    ) -> Result<(), PersistenceError> {
        self.persistence.save(&staged).await?;
        *state = staged;
        Ok(())
    }
}

/// Millisecond timestamp, pushed past the newest existing id if the clock
/// would repeat or go backwards. `None` once the newest id is `u64::MAX`.
fn next_id(snapshot: &StoreSnapshot, now: OffsetDateTime) -> Option<u64> {
    let millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
    match snapshot.max_id() {
        Some(max_id) if max_id >= millis => max_id.checked_add(1),
        _ => Some(millis),
    }
}
