//! Headless Hero Ranker
//!
//! Reads hero records as JSON and writes profession affinity scores as JSON.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use hero_ranking::core::config::{config, set_config, RankingConfig};
use hero_ranking::core::error::{HeroError, Result};
use hero_ranking::core::types::HeroRecord;
use hero_ranking::ranking::{init_tables, RankingEngine, RankingResult};

/// Headless Hero Ranker - profession affinity scores for hero records
#[derive(Parser, Debug)]
#[command(name = "rank_heroes")]
#[command(about = "Score hero records for mining, gardening, foraging and fishing")]
struct Args {
    /// JSON file holding an array of hero records (stdin when omitted)
    input: Option<PathBuf>,

    /// Affinity table TOML replacing the built-in tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Minimum batch size ranked in parallel
    #[arg(long, default_value_t = 256)]
    parallel_threshold: usize,

    /// Do not log rejected records
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// JSON output structure, one per input record
#[derive(Serialize)]
struct RankedHero {
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<RankingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hero_ranking=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let ranking_config = RankingConfig {
        parallel_threshold: args.parallel_threshold,
        tables_path: args.tables,
        log_rejections: !args.quiet,
    };
    ranking_config.validate().map_err(HeroError::Config)?;
    if set_config(ranking_config).is_err() {
        tracing::warn!("Ranking config already set, keeping existing values");
    }

    let tables = init_tables(config())?;

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let records: Vec<HeroRecord> = serde_json::from_str(&input)?;
    tracing::info!("Ranking {} heroes", records.len());

    let engine = RankingEngine::from_config(tables, config());
    let output: Vec<RankedHero> = records
        .iter()
        .zip(engine.rank_many(&records))
        .map(|(record, result)| match result {
            Ok(ranking) => RankedHero {
                id: record.id,
                ranking: Some(ranking),
                error: None,
            },
            Err(e) => RankedHero {
                id: record.id,
                ranking: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let rejected = output.iter().filter(|h| h.error.is_some()).count();
    if rejected > 0 {
        tracing::info!("{} of {} heroes rejected", rejected, output.len());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
