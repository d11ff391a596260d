//! Ranking engine - combines the affinity tables into profession scores
//!
//! Each profession score is the rounded sum of four independent
//! contributions: main class, subclass, stat boost 2 and rarity. There is
//! no coupling between the axes and no normalization across professions.

use crate::core::config::{config, RankingConfig};
use crate::core::error::RankingError;
use crate::core::types::{HeroAttributes, HeroRecord, Profession};
use crate::ranking::result::RankingResult;
use crate::ranking::tables::{tables, AffinityTables};
use rayon::prelude::*;

/// Stateless scorer bound to a set of affinity tables
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    tables: &'a AffinityTables,
    parallel_threshold: usize,
    log_rejections: bool,
}

impl RankingEngine<'static> {
    /// Engine over the process-wide tables and config
    ///
    /// Reads (and so fixes) the global config; call `set_config` first.
    pub fn new() -> Self {
        Self::from_config(tables(), config())
    }
}

impl Default for RankingEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RankingEngine<'a> {
    /// Engine over explicit tables with default batch settings
    ///
    /// Leaves the process-wide config untouched.
    pub fn with_tables(tables: &'a AffinityTables) -> Self {
        Self::from_config(tables, &RankingConfig::default())
    }

    /// Engine over explicit tables with batch settings from `config`
    pub fn from_config(tables: &'a AffinityTables, config: &RankingConfig) -> Self {
        Self {
            tables,
            parallel_threshold: config.parallel_threshold.max(1),
            log_rejections: config.log_rejections,
        }
    }

    /// Override the batch size at which `rank_many` goes parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn tables(&self) -> &'a AffinityTables {
        self.tables
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn logs_rejections(&self) -> bool {
        self.log_rejections
    }

    /// Unrounded sum of the four table contributions for one profession
    pub fn raw_score(&self, attrs: &HeroAttributes, profession: Profession) -> f64 {
        self.tables.class_base(attrs.main_class).get(profession)
            + self.tables.subclass_adjust(attrs.sub_class).get(profession)
            + self.tables.stat_boost_adjust(attrs.stat_boost2).get(profession)
            + self.tables.rarity_adjust(attrs.rarity).get(profession)
    }

    /// Score typed hero attributes
    pub fn compute(&self, attrs: &HeroAttributes) -> RankingResult {
        let score = |profession| round_score(self.raw_score(attrs, profession));

        RankingResult {
            mining: score(Profession::Mining),
            gardening: score(Profession::Gardening),
            foraging: score(Profession::Foraging),
            fishing: score(Profession::Fishing),
        }
    }

    /// Validate a raw hero record and score it
    ///
    /// All-or-nothing: any unresolvable field fails the whole record.
    pub fn rank(&self, record: &HeroRecord) -> Result<RankingResult, RankingError> {
        let attrs = HeroAttributes::try_from(record)?;
        let result = self.compute(&attrs);
        tracing::debug!(
            "Ranked hero {:?} ({}:{} r{} {}): {:?}",
            record.id,
            attrs.main_class.name(),
            attrs.sub_class.name(),
            attrs.rarity.ordinal(),
            attrs.stat_boost2.code(),
            result
        );
        Ok(result)
    }

    /// Rank a batch, one result per record in input order
    pub fn rank_many(&self, records: &[HeroRecord]) -> Vec<Result<RankingResult, RankingError>> {
        let rank_one = |record: &HeroRecord| {
            let result = self.rank(record);
            if let Err(e) = &result {
                if self.log_rejections {
                    tracing::warn!("Rejected hero {:?}: {}", record.id, e);
                }
            }
            result
        };

        if records.len() >= self.parallel_threshold {
            // PARALLEL: rankings share nothing but the read-only tables
            records.par_iter().map(rank_one).collect()
        } else {
            records.iter().map(rank_one).collect()
        }
    }
}

/// Round half away from zero
///
/// Loaded tables cap each entry at `MAX_TABLE_VALUE`, so the sum fits `u32`.
fn round_score(sum: f64) -> u32 {
    sum.round() as u32
}

/// Score typed attributes against the process-wide tables
pub fn compute(attrs: &HeroAttributes) -> RankingResult {
    RankingEngine::new().compute(attrs)
}

/// Validate and score a raw record against the process-wide tables
pub fn rank(record: &HeroRecord) -> Result<RankingResult, RankingError> {
    RankingEngine::new().rank(record)
}
