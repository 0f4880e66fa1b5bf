use std::path::PathBuf;
use thiserror::Error;
use crate::helpers::validation::ValidationError;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Suggestion not found")]
    NotFound { suggestion_id: u64 },

    #[error("User has already voted for this suggestion")]
    DuplicateVote { user_id: String, suggestion_id: u64 },

    #[error("No suggestion ids left to allocate")]
    IdSpaceExhausted,

    #[error("Vote counter for suggestion {suggestion_id} is full")]
    VoteCountExhausted { suggestion_id: u64 },

    #[error("Failed to persist suggestions: {0}")]
    Persistence(#[from] PersistenceError),
}
