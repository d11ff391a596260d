//! Hero Ranking - profession affinity scores for blockchain-game heroes

pub mod core;
pub mod ranking;
