//! Ranking output: one affinity score per profession

use crate::core::types::Profession;
use serde::{Deserialize, Serialize};

/// Affinity scores for a single hero
///
/// Scores are independent of each other; they are not normalized to any
/// common total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingResult {
    pub mining: u32,
    pub gardening: u32,
    pub foraging: u32,
    pub fishing: u32,
}

impl RankingResult {
    pub fn new(mining: u32, gardening: u32, foraging: u32, fishing: u32) -> Self {
        Self {
            mining,
            gardening,
            foraging,
            fishing,
        }
    }

    pub fn get(&self, profession: Profession) -> u32 {
        match profession {
            Profession::Mining => self.mining,
            Profession::Gardening => self.gardening,
            Profession::Foraging => self.foraging,
            Profession::Fishing => self.fishing,
        }
    }

    /// Scores paired with their profession, in profession order
    pub fn iter(&self) -> impl Iterator<Item = (Profession, u32)> + '_ {
        Profession::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Professions from best to worst fit
    ///
    /// Equal scores keep profession order (mining, gardening, foraging, fishing).
    pub fn ranked(&self) -> [(Profession, u32); 4] {
        let mut ranked = Profession::ALL.map(|p| (p, self.get(p)));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The profession this hero is best suited for
    pub fn best(&self) -> Profession {
        self.ranked()[0].0
    }
}
