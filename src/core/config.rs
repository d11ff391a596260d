//! Ranking configuration with documented constants

use std::path::PathBuf;

/// Configuration for the ranking pipeline
///
/// The scoring itself has no knobs; these values only steer how batches
/// are processed and where the affinity tables come from.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Minimum batch size before `rank_many` switches to parallel processing
    ///
    /// A single ranking is a handful of lookups and additions, so thread
    /// overhead dominates for small batches. At 256 we only fan out for
    /// roster-sized inputs such as full marketplace scans.
    pub parallel_threshold: usize,

    /// Affinity table file to install instead of the built-in tables
    ///
    /// `None` keeps the built-in tables. The file is read once by
    /// `init_tables`; later edits have no effect on a running process.
    pub tables_path: Option<PathBuf>,

    /// Emit a warning for every hero record rejected during batch ranking
    pub log_rejections: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            tables_path: None,
            log_rejections: true,
        }
    }
}

impl RankingConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".into());
        }

        if let Some(path) = &self.tables_path {
            if path.as_os_str().is_empty() {
                return Err("tables_path is set but empty".into());
            }
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RankingConfig> = OnceLock::new();

/// Get the global ranking config (initializes with defaults if not set)
pub fn config() -> &'static RankingConfig {
    CONFIG.get_or_init(RankingConfig::default)
}

/// Set the global ranking config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RankingConfig) -> Result<(), RankingConfig> {
    CONFIG.set(config)
}
