pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, RankingConfig};
pub use error::{HeroError, RankingError, Result};
pub use types::{HeroAttributes, HeroClass, HeroRecord, Profession, Rarity, StatBoost};
