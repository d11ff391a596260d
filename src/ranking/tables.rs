//! Affinity tables - per-profession contributions of each hero attribute
//!
//! A hero's score for a profession is the sum of four rows, one from each
//! table below. The built-in rows are written as exhaustive matches so a new
//! class or stat gene cannot compile without a row in every table.

use crate::core::types::{HeroClass, Profession, Rarity, StatBoost};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One table row: a contribution for each of the four professions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionWeights {
    pub mining: f64,
    pub gardening: f64,
    pub foraging: f64,
    pub fishing: f64,
}

impl ProfessionWeights {
    pub const fn new(mining: f64, gardening: f64, foraging: f64, fishing: f64) -> Self {
        Self {
            mining,
            gardening,
            foraging,
            fishing,
        }
    }

    pub fn get(&self, profession: Profession) -> f64 {
        match profession {
            Profession::Mining => self.mining,
            Profession::Gardening => self.gardening,
            Profession::Foraging => self.foraging,
            Profession::Fishing => self.fishing,
        }
    }
}

/// The four lookup tables, indexed by enum position
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityTables {
    pub(crate) class_base: [ProfessionWeights; HeroClass::COUNT],
    pub(crate) subclass_adjust: [ProfessionWeights; HeroClass::COUNT],
    pub(crate) stat_boost_adjust: [ProfessionWeights; StatBoost::COUNT],
    pub(crate) rarity_adjust: [ProfessionWeights; Rarity::COUNT],
}

impl AffinityTables {
    /// Tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            class_base: HeroClass::ALL.map(class_base_row),
            subclass_adjust: HeroClass::ALL.map(subclass_adjust_row),
            stat_boost_adjust: StatBoost::ALL.map(stat_boost_row),
            rarity_adjust: Rarity::ALL.map(rarity_row),
        }
    }

    pub fn class_base(&self, class: HeroClass) -> &ProfessionWeights {
        &self.class_base[class.index()]
    }

    pub fn subclass_adjust(&self, class: HeroClass) -> &ProfessionWeights {
        &self.subclass_adjust[class.index()]
    }

    pub fn stat_boost_adjust(&self, stat: StatBoost) -> &ProfessionWeights {
        &self.stat_boost_adjust[stat.index()]
    }

    pub fn rarity_adjust(&self, rarity: Rarity) -> &ProfessionWeights {
        &self.rarity_adjust[rarity.index()]
    }

    /// Smallest entry across all four tables
    pub fn min_value(&self) -> f64 {
        self.class_base
            .iter()
            .chain(&self.subclass_adjust)
            .chain(&self.stat_boost_adjust)
            .chain(&self.rarity_adjust)
            .flat_map(|row| Profession::ALL.map(|p| row.get(p)))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for AffinityTables {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn row(mining: f64, gardening: f64, foraging: f64, fishing: f64) -> ProfessionWeights {
    ProfessionWeights::new(mining, gardening, foraging, fishing)
}

/// Main class baseline (mining, gardening, foraging, fishing)
pub const fn class_base_row(class: HeroClass) -> ProfessionWeights {
    match class {
        HeroClass::Warrior => row(64.0, 14.5, 21.0, 15.0),
        HeroClass::Knight => row(58.0, 18.0, 17.0, 14.0),
        HeroClass::Thief => row(22.0, 15.0, 52.0, 33.0),
        HeroClass::Archer => row(24.0, 17.0, 55.0, 30.0),
        HeroClass::Priest => row(16.0, 56.0, 24.0, 20.0),
        HeroClass::Wizard => row(14.0, 50.0, 30.0, 22.0),
        HeroClass::Monk => row(30.0, 40.0, 26.0, 35.0),
        HeroClass::Pirate => row(45.0, 7.25, 18.0, 28.4),
        HeroClass::Berserker => row(62.0, 10.0, 20.0, 16.0),
        HeroClass::Seer => row(12.0, 54.0, 22.0, 28.0),
        HeroClass::Paladin => row(60.0, 35.0, 15.0, 14.0),
        HeroClass::DarkKnight => row(66.0, 12.0, 26.0, 18.0),
        HeroClass::Summoner => row(18.0, 58.0, 34.0, 24.0),
        HeroClass::Ninja => row(26.0, 14.0, 60.0, 40.0),
        HeroClass::Dragoon => row(64.0, 20.0, 30.0, 36.0),
        HeroClass::Sage => row(20.0, 64.0, 36.0, 30.0),
        HeroClass::DreadKnight => row(70.0, 30.0, 40.0, 38.0),
    }
}

/// Subclass contribution, roughly a fifth of the matching class baseline
pub const fn subclass_adjust_row(class: HeroClass) -> ProfessionWeights {
    match class {
        HeroClass::Warrior => row(10.0, 1.5, 8.0, 8.0),
        HeroClass::Knight => row(9.0, 4.0, 3.0, 3.0),
        HeroClass::Thief => row(3.0, 2.0, 10.0, 6.0),
        HeroClass::Archer => row(4.0, 3.0, 11.0, 5.0),
        HeroClass::Priest => row(2.0, 11.0, 4.0, 3.0),
        HeroClass::Wizard => row(2.0, 10.0, 6.0, 4.0),
        HeroClass::Monk => row(5.0, 8.0, 4.0, 7.0),
        HeroClass::Pirate => row(7.0, 1.0, 3.0, 9.5),
        HeroClass::Berserker => row(11.0, 1.0, 4.0, 3.0),
        HeroClass::Seer => row(2.0, 10.5, 3.0, 5.0),
        HeroClass::Paladin => row(12.0, 12.5, 0.0, 0.0),
        HeroClass::DarkKnight => row(13.0, 2.0, 5.0, 4.0),
        HeroClass::Summoner => row(3.0, 12.0, 7.0, 5.0),
        HeroClass::Ninja => row(5.0, 2.0, 12.0, 8.0),
        HeroClass::Dragoon => row(13.0, 4.0, 6.0, 7.0),
        HeroClass::Sage => row(4.0, 13.0, 7.0, 6.0),
        HeroClass::DreadKnight => row(14.0, 6.0, 8.0, 8.0),
    }
}

/// Stat-boost gene bonus; each stat leans towards the professions it drives
pub const fn stat_boost_row(stat: StatBoost) -> ProfessionWeights {
    match stat {
        StatBoost::Str => row(4.0, 0.0, 2.0, 0.0),
        StatBoost::Agi => row(0.0, 0.0, 2.0, 4.0),
        StatBoost::Int => row(0.0, 2.0, 4.0, 0.0),
        StatBoost::Wis => row(0.0, 4.0, 0.0, 2.0),
        StatBoost::Lck => row(0.0, 2.0, 0.0, 4.0),
        StatBoost::Vit => row(2.0, 4.0, 0.0, 0.0),
        StatBoost::End => row(3.0, 0.0, 0.0, 1.0),
        StatBoost::Dex => row(0.0, 0.0, 4.0, 2.0),
    }
}

/// Rarity bonus, flat across professions
pub const fn rarity_row(rarity: Rarity) -> ProfessionWeights {
    match rarity {
        Rarity::Common => row(0.0, 0.0, 0.0, 0.0),
        Rarity::Uncommon => row(2.0, 2.0, 2.0, 2.0),
        Rarity::Rare => row(4.0, 4.0, 4.0, 4.0),
        Rarity::Legendary => row(6.0, 6.0, 6.0, 6.0),
        Rarity::Mythic => row(8.0, 8.0, 8.0, 8.0),
    }
}

// === PROCESS-WIDE TABLES ===

static TABLES: OnceLock<AffinityTables> = OnceLock::new();

/// Get the process-wide tables (initializes with the built-in tables if not set)
pub fn tables() -> &'static AffinityTables {
    TABLES.get_or_init(AffinityTables::builtin)
}

/// Install the process-wide tables (can only be called once, before first use)
///
/// Returns Err with the rejected tables if tables were already set or read.
pub fn set_tables(tables: AffinityTables) -> Result<(), AffinityTables> {
    TABLES.set(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_non_negative() {
        let tables = AffinityTables::builtin();
        assert!(tables.min_value() >= 0.0);
    }

    #[test]
    fn test_lookup_uses_enum_position() {
        let tables = AffinityTables::builtin();
        assert_eq!(*tables.class_base(HeroClass::Pirate), class_base_row(HeroClass::Pirate));
        assert_eq!(
            *tables.subclass_adjust(HeroClass::DreadKnight),
            subclass_adjust_row(HeroClass::DreadKnight)
        );
        assert_eq!(*tables.stat_boost_adjust(StatBoost::Dex), stat_boost_row(StatBoost::Dex));
        assert_eq!(*tables.rarity_adjust(Rarity::Mythic), rarity_row(Rarity::Mythic));
    }

    #[test]
    fn test_rarity_rows_increase() {
        let tables = AffinityTables::builtin();
        for pair in Rarity::ALL.windows(2) {
            let lower = tables.rarity_adjust(pair[0]);
            let higher = tables.rarity_adjust(pair[1]);
            for p in Profession::ALL {
                assert!(higher.get(p) > lower.get(p));
            }
        }
    }

    #[test]
    fn test_weights_get() {
        let w = ProfessionWeights::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(w.get(Profession::Mining), 1.0);
        assert_eq!(w.get(Profession::Fishing), 4.0);
    }

    #[test]
    fn test_global_tables_default_to_builtin() {
        // No test in this binary installs custom tables
        assert_eq!(*tables(), AffinityTables::builtin());
    }
}
