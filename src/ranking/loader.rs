//! Load affinity tables from TOML files
//!
//! The file layout mirrors the four tables:
//!
//! ```toml
//! [class_base.warrior]
//! mining = 64.0
//! gardening = 14.5
//! foraging = 21.0
//! fishing = 15.0
//! ```
//!
//! Row keys are class gene names, stat codes and rarity names (or ordinals),
//! all case-insensitive. Rarity names map to ordinals as common = 0,
//! uncommon = 1, rare = 2, legendary = 3, mythic = 4. Every table must cover
//! its whole domain exactly once, with all four professions, and no value may
//! exceed [`MAX_TABLE_VALUE`].

use crate::core::config::RankingConfig;
use crate::core::types::{HeroClass, Profession, Rarity, StatBoost};
use crate::ranking::tables::{set_tables, tables, AffinityTables, ProfessionWeights};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted table entry; four of them still sum within `u32`
pub const MAX_TABLE_VALUE: f64 = u32::MAX as f64 / 4.0;

/// Configuration defects in an affinity table file
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A domain value has no row
    #[error("{table}: missing row for {key:?}")]
    MissingRow { table: &'static str, key: &'static str },
    /// A row lacks one of the profession columns
    #[error("{table}.{key}: missing value for {profession}")]
    MissingValue {
        table: &'static str,
        key: String,
        profession: &'static str,
    },
    /// A row key names nothing in the domain
    #[error("{table}: unknown row {key:?}")]
    UnknownRow { table: &'static str, key: String },
    /// Two row keys resolve to the same domain value
    #[error("{table}: rows {first:?} and {second:?} both name {canonical:?}")]
    DuplicateRow {
        table: &'static str,
        first: String,
        second: String,
        canonical: &'static str,
    },
    /// Negative, NaN, infinite or oversized contribution
    #[error("{table}.{key}.{profession}: invalid value {value}")]
    InvalidValue {
        table: &'static str,
        key: String,
        profession: &'static str,
        value: f64,
    },
    /// Process-wide tables were read or installed before this file
    #[error("affinity tables already initialized, cannot install {}", path.display())]
    AlreadyInitialized { path: PathBuf },
}

/// Enum domains that index an affinity table
trait TableKey: Copy + 'static {
    const COUNT: usize;

    fn all() -> &'static [Self];
    fn key(self) -> &'static str;
    fn from_key(key: &str) -> Option<Self>;
    fn index(self) -> usize;
}

impl TableKey for HeroClass {
    const COUNT: usize = HeroClass::COUNT;

    fn all() -> &'static [Self] {
        HeroClass::all()
    }
    fn key(self) -> &'static str {
        self.name()
    }
    fn from_key(key: &str) -> Option<Self> {
        HeroClass::from_name(key)
    }
    fn index(self) -> usize {
        HeroClass::index(self)
    }
}

impl TableKey for StatBoost {
    const COUNT: usize = StatBoost::COUNT;

    fn all() -> &'static [Self] {
        StatBoost::all()
    }
    fn key(self) -> &'static str {
        self.code()
    }
    fn from_key(key: &str) -> Option<Self> {
        StatBoost::from_code(key)
    }
    fn index(self) -> usize {
        StatBoost::index(self)
    }
}

impl TableKey for Rarity {
    const COUNT: usize = Rarity::COUNT;

    fn all() -> &'static [Self] {
        Rarity::all()
    }
    fn key(self) -> &'static str {
        self.name()
    }
    fn from_key(key: &str) -> Option<Self> {
        Rarity::from_name(key)
    }
    fn index(self) -> usize {
        Rarity::index(self)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    class_base: BTreeMap<String, RawRow>,
    #[serde(default)]
    subclass_adjust: BTreeMap<String, RawRow>,
    #[serde(default)]
    stat_boost_adjust: BTreeMap<String, RawRow>,
    #[serde(default)]
    rarity_adjust: BTreeMap<String, RawRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRow {
    mining: Option<f64>,
    gardening: Option<f64>,
    foraging: Option<f64>,
    fishing: Option<f64>,
}

impl RawRow {
    fn get(&self, profession: Profession) -> Option<f64> {
        match profession {
            Profession::Mining => self.mining,
            Profession::Gardening => self.gardening,
            Profession::Foraging => self.foraging,
            Profession::Fishing => self.fishing,
        }
    }

    fn resolve(&self, table: &'static str, key: &str) -> Result<ProfessionWeights, TableError> {
        let mut values = [0.0; 4];
        for (slot, profession) in values.iter_mut().zip(Profession::ALL) {
            let value = self.get(profession).ok_or_else(|| TableError::MissingValue {
                table,
                key: key.to_string(),
                profession: profession.name(),
            })?;
            if !value.is_finite() || !(0.0..=MAX_TABLE_VALUE).contains(&value) {
                return Err(TableError::InvalidValue {
                    table,
                    key: key.to_string(),
                    profession: profession.name(),
                    value,
                });
            }
            *slot = value;
        }
        let [mining, gardening, foraging, fishing] = values;
        Ok(ProfessionWeights::new(mining, gardening, foraging, fishing))
    }
}

/// Resolve one table section into rows ordered by enum position
fn resolve_rows<K: TableKey, const N: usize>(
    table: &'static str,
    rows: &BTreeMap<String, RawRow>,
) -> Result<[ProfessionWeights; N], TableError> {
    debug_assert_eq!(K::COUNT, N);

    let mut resolved: [Option<ProfessionWeights>; N] = [None; N];
    let mut seen: [Option<&str>; N] = [None; N];
    for (key, raw) in rows {
        let domain_key = K::from_key(key).ok_or_else(|| TableError::UnknownRow {
            table,
            key: key.clone(),
        })?;
        let idx = domain_key.index();
        if let Some(first) = seen[idx] {
            return Err(TableError::DuplicateRow {
                table,
                first: first.to_string(),
                second: key.clone(),
                canonical: domain_key.key(),
            });
        }
        seen[idx] = Some(key.as_str());
        resolved[idx] = Some(raw.resolve(table, key)?);
    }

    for &domain_key in K::all() {
        if resolved[domain_key.index()].is_none() {
            return Err(TableError::MissingRow {
                table,
                key: domain_key.key(),
            });
        }
    }

    Ok(resolved.map(Option::unwrap_or_default))
}

/// Parse affinity tables from a TOML string
pub fn parse_tables(content: &str) -> Result<AffinityTables, TableError> {
    let file: TableFile = toml::from_str(content)?;

    Ok(AffinityTables {
        class_base: resolve_rows::<HeroClass, { HeroClass::COUNT }>("class_base", &file.class_base)?,
        subclass_adjust: resolve_rows::<HeroClass, { HeroClass::COUNT }>(
            "subclass_adjust",
            &file.subclass_adjust,
        )?,
        stat_boost_adjust: resolve_rows::<StatBoost, { StatBoost::COUNT }>(
            "stat_boost_adjust",
            &file.stat_boost_adjust,
        )?,
        rarity_adjust: resolve_rows::<Rarity, { Rarity::COUNT }>("rarity_adjust", &file.rarity_adjust)?,
    })
}

/// Load affinity tables from a TOML file on disk
pub fn load_tables(path: &Path) -> Result<AffinityTables, TableError> {
    let content = std::fs::read_to_string(path)?;
    let loaded = parse_tables(&content)?;
    tracing::info!("Loaded affinity tables from {}", path.display());
    Ok(loaded)
}

/// Install the tables named by `config` as the process-wide tables
///
/// Without a `tables_path` this just returns the current tables. A path
/// given after the tables were already read or installed is an error.
pub fn init_tables(config: &RankingConfig) -> Result<&'static AffinityTables, TableError> {
    if let Some(path) = &config.tables_path {
        let loaded = load_tables(path)?;
        set_tables(loaded).map_err(|_| TableError::AlreadyInitialized { path: path.clone() })?;
        tracing::info!("Installed affinity tables from {}", path.display());
    }
    Ok(tables())
}
