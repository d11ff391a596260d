//! Integration test: Hero Ranking
//!
//! Scores heroes end to end from upstream-shaped JSON records and checks the
//! properties every ranking must hold over the whole attribute domain.

use hero_ranking::core::error::RankingError;
use hero_ranking::core::types::{HeroAttributes, HeroClass, HeroRecord, Profession, Rarity, StatBoost};
use hero_ranking::ranking::tables::rarity_row;
use hero_ranking::ranking::{compute, rank, RankingEngine, RankingResult};
use proptest::prelude::*;
use proptest::sample::select;

/// Heroes as they come out of the fetch layer, extra fields included
const FIXTURE_HEROES: &str = r#"[
    { "id": 71052, "mainClass": "pirate",  "subClass": "warrior", "rarity": 0, "statBoost2": "WIS", "profession": "fishing" },
    { "id": 68846, "mainClass": "warrior", "subClass": "paladin", "rarity": 0, "statBoost2": "END", "profession": "mining" },
    { "id": 65154, "mainClass": "warrior", "subClass": "warrior", "rarity": 4, "statBoost2": "STR", "profession": "mining" }
]"#;

fn attrs_strategy() -> impl Strategy<Value = HeroAttributes> {
    (
        select(HeroClass::all()),
        select(HeroClass::all()),
        select(Rarity::all()),
        select(StatBoost::all()),
    )
        .prop_map(|(main, sub, rarity, boost)| HeroAttributes::new(main, sub, rarity, boost))
}

#[test]
fn test_fixture_heroes() {
    let records: Vec<HeroRecord> = serde_json::from_str(FIXTURE_HEROES).unwrap();
    let results: Vec<_> = records.iter().map(|r| rank(r).unwrap()).collect();

    assert_eq!(results[0], RankingResult::new(55, 13, 26, 38));
    assert_eq!(results[1], RankingResult::new(79, 27, 21, 16));
    assert_eq!(results[2], RankingResult::new(86, 24, 39, 31));
}

#[test]
fn test_fixture_best_professions() {
    let records: Vec<HeroRecord> = serde_json::from_str(FIXTURE_HEROES).unwrap();
    for record in &records {
        assert_eq!(rank(record).unwrap().best(), Profession::Mining);
    }
}

#[test]
fn test_every_combination_ranks() {
    let engine = RankingEngine::new();
    let mut count = 0;

    for &main in HeroClass::all() {
        for &sub in HeroClass::all() {
            for &boost in StatBoost::all() {
                for ordinal in 0..=4 {
                    let record = HeroRecord::new(main.name(), sub.name(), ordinal, boost.code());
                    let result = engine.rank(&record).unwrap();
                    assert!(result.iter().all(|(_, score)| score > 0));
                    count += 1;
                }
            }
        }
    }

    assert_eq!(count, HeroClass::COUNT * HeroClass::COUNT * StatBoost::COUNT * Rarity::COUNT);
}

#[test]
fn test_no_partial_results() {
    let records = vec![
        HeroRecord::new("pirate", "warrior", 7, "WIS"),
        HeroRecord::new("pirate", "warrior", 0, "wisdom"),
        HeroRecord::new("pirate", "", 0, "WIS"),
        HeroRecord::new("buccaneer", "warrior", 0, "WIS"),
    ];
    let results = RankingEngine::new().rank_many(&records);

    assert_eq!(
        results,
        vec![
            Err(RankingError::InvalidRarity(7)),
            Err(RankingError::UnknownStatBoost("wisdom".into())),
            Err(RankingError::UnknownSubclass("".into())),
            Err(RankingError::UnknownClass("buccaneer".into())),
        ]
    );
}

#[test]
fn test_parallel_batch_matches_single_ranking() {
    let records: Vec<HeroRecord> = HeroClass::all()
        .iter()
        .flat_map(|main| {
            StatBoost::all()
                .iter()
                .map(move |boost| HeroRecord::new(main.name(), "ninja", 3, boost.code()))
        })
        .collect();

    let batch = RankingEngine::new().with_parallel_threshold(8).rank_many(&records);
    assert_eq!(batch.len(), records.len());
    for (record, result) in records.iter().zip(&batch) {
        assert_eq!(result, &rank(record));
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let attrs = HeroAttributes::new(HeroClass::Sage, HeroClass::Priest, Rarity::Legendary, StatBoost::Int);
    let expected = compute(&attrs);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..1000).map(|_| compute(&attrs)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            let results = handle.join().unwrap();
            assert!(results.iter().all(|r| *r == expected));
        }
    });
}

proptest! {
    #[test]
    fn ranking_is_deterministic(attrs in attrs_strategy()) {
        let engine = RankingEngine::new();
        prop_assert_eq!(engine.compute(&attrs), engine.compute(&attrs));
    }

    #[test]
    fn typed_and_record_paths_agree(attrs in attrs_strategy()) {
        let record = HeroRecord::new(
            attrs.main_class.name(),
            attrs.sub_class.name(),
            i64::from(attrs.rarity.ordinal()),
            attrs.stat_boost2.code(),
        );
        prop_assert_eq!(rank(&record), Ok(compute(&attrs)));
    }

    #[test]
    fn rarity_shifts_by_row_delta(attrs in attrs_strategy(), other in select(Rarity::all())) {
        let before = compute(&attrs);
        let after = compute(&HeroAttributes { rarity: other, ..attrs });

        for profession in Profession::ALL {
            let delta = rarity_row(other).get(profession) - rarity_row(attrs.rarity).get(profession);
            let shift = i64::from(after.get(profession)) - i64::from(before.get(profession));
            prop_assert_eq!(shift as f64, delta);
        }
    }

    #[test]
    fn rarity_does_not_reorder_professions(attrs in attrs_strategy(), other in select(Rarity::all())) {
        let before = compute(&attrs);
        let after = compute(&HeroAttributes { rarity: other, ..attrs });

        for a in Profession::ALL {
            for b in Profession::ALL {
                prop_assert_eq!(before.get(a).cmp(&before.get(b)), after.get(a).cmp(&after.get(b)));
            }
        }
    }

    #[test]
    fn unknown_class_names_rejected(name in "[a-z]{1,12}") {
        prop_assume!(HeroClass::from_name(&name).is_none());
        prop_assert_eq!(
            rank(&HeroRecord::new(name.clone(), "warrior", 0, "STR")),
            Err(RankingError::UnknownClass(name.clone()))
        );
        prop_assert_eq!(
            rank(&HeroRecord::new("warrior", name.clone(), 0, "STR")),
            Err(RankingError::UnknownSubclass(name))
        );
    }

    #[test]
    fn out_of_range_rarity_rejected(rarity in prop_oneof![i64::MIN..0i64, 5i64..i64::MAX]) {
        prop_assert_eq!(
            rank(&HeroRecord::new("warrior", "warrior", rarity, "STR")),
            Err(RankingError::InvalidRarity(rarity))
        );
    }
}
