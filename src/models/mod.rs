pub mod snapshot;
pub mod suggestion;
pub mod vote;
