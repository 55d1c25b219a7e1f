use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to parse outline: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Node not found in index: {0:?}")]
    NodeNotFound(Index),

    #[error("Invalid outline entry at {path:?}: {reason}")]
    InvalidEntry { path: Vec<usize>, reason: String },
}

pub type NavResult<T> = Result<T, NavError>;
