//! Profession ranking for heroes
//!
//! Turns a hero's class, subclass, stat-boost gene and rarity into affinity
//! scores for mining, gardening, foraging and fishing.

pub mod engine;
pub mod loader;
pub mod result;
pub mod tables;

pub use engine::{compute, rank, RankingEngine};
pub use loader::{init_tables, load_tables, parse_tables, TableError, MAX_TABLE_VALUE};
pub use result::RankingResult;
pub use tables::{set_tables, tables, AffinityTables, ProfessionWeights};
