//! Core type definitions used throughout the codebase
//!
//! Heroes arrive from the decoding layer as loosely typed records. Everything
//! past the record boundary works with the closed enums defined here.

use crate::core::error::RankingError;
use serde::{Deserialize, Serialize};

/// Base gathering profession a hero can be rated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Profession {
    Mining,
    Gardening,
    Foraging,
    Fishing,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::Mining,
        Profession::Gardening,
        Profession::Foraging,
        Profession::Fishing,
    ];

    /// Get all professions, in score order
    pub fn all() -> &'static [Profession] {
        &Self::ALL
    }

    /// Lowercase name as used in hero records and table files
    pub fn name(&self) -> &'static str {
        match self {
            Profession::Mining => "mining",
            Profession::Gardening => "gardening",
            Profession::Foraging => "foraging",
            Profession::Fishing => "fishing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Combat archetype, used for both the main class and the subclass gene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeroClass {
    // Basic
    Warrior,
    Knight,
    Thief,
    Archer,
    Priest,
    Wizard,
    Monk,
    Pirate,
    Berserker,
    Seer,
    // Advanced
    Paladin,
    DarkKnight,
    Summoner,
    Ninja,
    // Elite
    Dragoon,
    Sage,
    // Exalted
    DreadKnight,
}

impl HeroClass {
    pub const COUNT: usize = 17;

    pub const ALL: [HeroClass; Self::COUNT] = [
        HeroClass::Warrior,
        HeroClass::Knight,
        HeroClass::Thief,
        HeroClass::Archer,
        HeroClass::Priest,
        HeroClass::Wizard,
        HeroClass::Monk,
        HeroClass::Pirate,
        HeroClass::Berserker,
        HeroClass::Seer,
        HeroClass::Paladin,
        HeroClass::DarkKnight,
        HeroClass::Summoner,
        HeroClass::Ninja,
        HeroClass::Dragoon,
        HeroClass::Sage,
        HeroClass::DreadKnight,
    ];

    /// Get all classes
    pub fn all() -> &'static [HeroClass] {
        &Self::ALL
    }

    /// Gene name as emitted by the decoding layer (e.g. "darkKnight")
    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "warrior",
            HeroClass::Knight => "knight",
            HeroClass::Thief => "thief",
            HeroClass::Archer => "archer",
            HeroClass::Priest => "priest",
            HeroClass::Wizard => "wizard",
            HeroClass::Monk => "monk",
            HeroClass::Pirate => "pirate",
            HeroClass::Berserker => "berserker",
            HeroClass::Seer => "seer",
            HeroClass::Paladin => "paladin",
            HeroClass::DarkKnight => "darkKnight",
            HeroClass::Summoner => "summoner",
            HeroClass::Ninja => "ninja",
            HeroClass::Dragoon => "dragoon",
            HeroClass::Sage => "sage",
            HeroClass::DreadKnight => "dreadKnight",
        }
    }

    /// Look up a class by gene name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Position of this class in [`HeroClass::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Secondary stat-boost gene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatBoost {
    Str,
    Agi,
    Int,
    Wis,
    Lck,
    Vit,
    End,
    Dex,
}

impl StatBoost {
    pub const COUNT: usize = 8;

    pub const ALL: [StatBoost; Self::COUNT] = [
        StatBoost::Str,
        StatBoost::Agi,
        StatBoost::Int,
        StatBoost::Wis,
        StatBoost::Lck,
        StatBoost::Vit,
        StatBoost::End,
        StatBoost::Dex,
    ];

    pub fn all() -> &'static [StatBoost] {
        &Self::ALL
    }

    /// Three-letter stat code ("STR", "AGI", ...)
    pub fn code(&self) -> &'static str {
        match self {
            StatBoost::Str => "STR",
            StatBoost::Agi => "AGI",
            StatBoost::Int => "INT",
            StatBoost::Wis => "WIS",
            StatBoost::Lck => "LCK",
            StatBoost::Vit => "VIT",
            StatBoost::End => "END",
            StatBoost::Dex => "DEX",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Hero rarity tier, ordinal 0 through 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    pub const COUNT: usize = 5;

    pub const ALL: [Rarity; Self::COUNT] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    pub fn all() -> &'static [Rarity] {
        &Self::ALL
    }

    /// Resolve an on-chain rarity ordinal; `None` outside 0..=4
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
        }
    }

    /// Accepts either the tier name or its ordinal ("rare", "2")
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Ok(ordinal) = name.parse::<i64>() {
            return Self::from_ordinal(ordinal);
        }
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Rarity {
    type Error = RankingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(i64::from(value)).ok_or(RankingError::InvalidRarity(i64::from(value)))
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity.ordinal()
    }
}

/// Hero record as handed over by the fetching/decoding layer
///
/// Only the fields the ranking needs are kept; anything else in the
/// upstream JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub main_class: String,
    pub sub_class: String,
    pub rarity: i64,
    pub stat_boost2: String,
}

impl HeroRecord {
    pub fn new(
        main_class: impl Into<String>,
        sub_class: impl Into<String>,
        rarity: i64,
        stat_boost2: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            main_class: main_class.into(),
            sub_class: sub_class.into(),
            rarity,
            stat_boost2: stat_boost2.into(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Immutable hero attributes that feed the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroAttributes {
    pub main_class: HeroClass,
    pub sub_class: HeroClass,
    pub rarity: Rarity,
    pub stat_boost2: StatBoost,
}

impl HeroAttributes {
    pub fn new(main_class: HeroClass, sub_class: HeroClass, rarity: Rarity, stat_boost2: StatBoost) -> Self {
        Self {
            main_class,
            sub_class,
            rarity,
            stat_boost2,
        }
    }
}

impl TryFrom<&HeroRecord> for HeroAttributes {
    type Error = RankingError;

    /// Checks rarity first, then main class, subclass and stat boost.
    fn try_from(record: &HeroRecord) -> Result<Self, Self::Error> {
        let rarity = Rarity::from_ordinal(record.rarity)
            .ok_or(RankingError::InvalidRarity(record.rarity))?;
        let main_class = HeroClass::from_name(&record.main_class)
            .ok_or_else(|| RankingError::UnknownClass(record.main_class.clone()))?;
        let sub_class = HeroClass::from_name(&record.sub_class)
            .ok_or_else(|| RankingError::UnknownSubclass(record.sub_class.clone()))?;
        let stat_boost2 = StatBoost::from_code(&record.stat_boost2)
            .ok_or_else(|| RankingError::UnknownStatBoost(record.stat_boost2.clone()))?;

        Ok(Self {
            main_class,
            sub_class,
            rarity,
            stat_boost2,
        })
    }
}
