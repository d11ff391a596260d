use thiserror::Error;

use crate::ranking::loader::TableError;

/// Bad hero input; never transient, so never retried
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error("Unknown main class: {0:?}")]
    UnknownClass(String),

    #[error("Unknown subclass: {0:?}")]
    UnknownSubclass(String),

    #[error("Unknown stat boost: {0:?}")]
    UnknownStatBoost(String),

    #[error("Invalid rarity {0}: expected 0-4")]
    InvalidRarity(i64),
}

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Affinity table error: {0}")]
    Table(#[from] TableError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeroError>;
