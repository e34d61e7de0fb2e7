//! Integration tests for scenario presets and their on-disk TOML copies.

use std::path::Path;

use ola_forecast::config::ScenarioConfig;
use ola_forecast::model::generate;
use ola_forecast::model::kpi::ForecastSummary;

fn summary_for(cfg: &ScenarioConfig) -> ForecastSummary {
    let request = cfg.build().expect("preset should build");
    ForecastSummary::from_series(&generate(&request))
}

#[test]
fn scenario_files_parse_and_validate() {
    for name in ScenarioConfig::PRESETS {
        let path = format!("scenarios/{name}.toml");
        let cfg = ScenarioConfig::from_toml_file(Path::new(&path));
        assert!(cfg.is_ok(), "\"{path}\" should parse: {:?}", cfg.err());
        let cfg = cfg.unwrap_or_else(|_| ScenarioConfig::baseline());
        let errors = cfg.validate();
        assert!(errors.is_empty(), "\"{path}\" should validate: {errors:?}");
    }
}

#[test]
fn scenario_files_match_built_in_presets() {
    for name in ScenarioConfig::PRESETS {
        let path = format!("scenarios/{name}.toml");
        let from_file = ScenarioConfig::from_toml_file(Path::new(&path))
            .unwrap_or_else(|_| panic!("\"{path}\" should parse"));
        let built_in = ScenarioConfig::from_preset(name)
            .unwrap_or_else(|_| panic!("preset \"{name}\" should load"));

        assert_eq!(from_file.request.city, built_in.request.city, "{name}");
        assert_eq!(from_file.request.date, built_in.request.date, "{name}");
        assert_eq!(from_file.request.hour, built_in.request.hour, "{name}");
        assert_eq!(
            from_file.conditions.weather, built_in.conditions.weather,
            "{name}"
        );
    }
}

#[test]
fn presets_produce_distinct_demand_dynamics() {
    let baseline = summary_for(&ScenarioConfig::baseline());
    let monsoon = summary_for(&ScenarioConfig::monsoon_rush());
    let winter = summary_for(&ScenarioConfig::winter_weekend());

    // Rainy monsoon evening in Bandra far outstrips a clear weekday morning
    // in Andheri.
    assert!(
        monsoon.peak_rides > baseline.peak_rides,
        "monsoon peak {} should exceed baseline peak {}",
        monsoon.peak_rides,
        baseline.peak_rides
    );
    assert!(monsoon.current_rides > baseline.current_rides);

    // All three presets disagree on the current-hour estimate.
    assert_ne!(baseline.current_rides, monsoon.current_rides);
    assert_ne!(baseline.current_rides, winter.current_rides);
    assert_ne!(monsoon.current_rides, winter.current_rides);
}

#[test]
fn monsoon_rush_hits_the_high_band() {
    // Bandra 6 PM, Monsoon, Rainy: 85 + 60 + 35 + 35 + 50 + 1.1 + 15.2 + 0
    let monsoon = summary_for(&ScenarioConfig::monsoon_rush());
    assert_eq!(monsoon.current_rides, 281);
    assert_eq!(
        ola_forecast::model::DemandLevel::from_demand(monsoon.current_rides),
        ola_forecast::model::DemandLevel::High
    );
}
