//! Lookups served from recorded upstream responses.

use std::path::PathBuf;

use tempfile::TempDir;

use keystone_lookup::history::SearchHistory;
use keystone_lookup::report::{render_table, DisplayFilter, NO_LOGS_MESSAGE};
use keystone_lookup::{
    Aggregator, Config, DropReason, InTimeTier, InitializationError, PlayerIdentity, Region,
};

fn demo_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/demo")
}

fn demo_config() -> Config {
    Config {
        fixtures_dir: Some(demo_dir()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_demo_fixtures() {
    let aggregator = Aggregator::new(&demo_config()).expect("aggregator");
    // Lookups match the fixture layout case-insensitively
    let identity = PlayerIdentity::new(Region::Eu, "Blackmoore", "Dyrael");

    let outcome = aggregator.lookup_detailed(&identity).await;
    let result = outcome.result.expect("demo profile exists");

    assert_eq!(result.profile.class, "Druid");
    assert_eq!(result.total_runs(), 3);

    let sd = &result.per_dungeon_results[0];
    assert_eq!(sd.dungeon_id, 12284);
    assert_eq!(sd.runs.len(), 1);
    assert_eq!(sd.runs[0].in_time_tier, InTimeTier::PlusThree);
    assert_eq!((sd.runs[0].dps, sd.runs[0].hps), (1500, 9000));

    let dos = &result.per_dungeon_results[6];
    let reports: Vec<&str> = dos.runs.iter().map(|r| r.report_id.as_str()).collect();
    assert_eq!(reports, vec!["DeF2", "AbC1"]);

    // The level 14 fight of the Sanguine Depths report
    assert_eq!(outcome.drops.count(DropReason::BelowMinimumLevel), 1);
    assert_eq!(outcome.drops.total(), 1);
}

#[tokio::test]
async fn test_unknown_character_in_fixtures() {
    let aggregator = Aggregator::new(&demo_config()).expect("aggregator");
    let identity = PlayerIdentity::new(Region::Us, "illidan", "nobody");
    assert!(aggregator.lookup(&identity).await.is_none());
}

#[tokio::test]
async fn test_missing_fixture_dir_is_an_init_error() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config {
        fixtures_dir: Some(dir.path().join("absent")),
        ..Default::default()
    };
    assert!(matches!(
        Aggregator::new(&config),
        Err(InitializationError::FixtureRootError(_))
    ));
}

#[tokio::test]
async fn test_profile_without_runs() {
    let dir = TempDir::new().expect("temp dir");
    let profile_dir = dir.path().join("profile/kr/azshara");
    std::fs::create_dir_all(&profile_dir).unwrap();
    std::fs::write(
        profile_dir.join("tankie.json"),
        r#"{"race": "Pandaren", "class": "Monk", "active_spec_name": "Brewmaster", "active_spec_role": "TANK"}"#,
    )
    .unwrap();

    let config = Config {
        fixtures_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let aggregator = Aggregator::new(&config).expect("aggregator");
    let identity = PlayerIdentity::new(Region::Kr, "azshara", "tankie");

    let outcome = aggregator.lookup_detailed(&identity).await;
    let result = outcome.result.expect("profile exists");
    assert!(!result.has_runs());
    assert_eq!(result.per_dungeon_results.len(), 8);
    assert!(outcome.run_index_error.is_some());

    let table = render_table(&identity, &result, aggregator.registry(), false);
    assert!(table.contains(NO_LOGS_MESSAGE));
}

#[tokio::test]
async fn test_filters_and_history_after_lookup() {
    let aggregator = Aggregator::new(&demo_config()).expect("aggregator");
    let identity = PlayerIdentity::new(Region::Eu, "blackmoore", "dyrael");
    let result = aggregator.lookup(&identity).await.expect("lookup result");

    let timed = DisplayFilter {
        min_level: 15,
        timed_only: true,
    }
    .apply(&result);
    assert_eq!(timed.total_runs(), 2);
    // Filtering never changes the result it was applied to
    assert_eq!(result.total_runs(), 3);

    let high = DisplayFilter {
        min_level: 21,
        timed_only: false,
    }
    .apply(&result);
    assert!(!high.has_runs());
    assert_eq!(high.per_dungeon_results.len(), 8);

    let dir = TempDir::new().expect("temp dir");
    let mut history = SearchHistory::load(dir.path().join("history.json"))
        .await
        .unwrap();
    history.record(&identity);
    history.save().await.unwrap();
    let reloaded = SearchHistory::load(dir.path().join("history.json"))
        .await
        .unwrap();
    assert_eq!(reloaded.entries()[0].identity(), identity);
}
