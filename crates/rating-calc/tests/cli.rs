//! End-to-end tests for rating-calc: argument parsing through to the JSON
//! report, with config and input files written to a temp directory.

use clap::Parser;
use rating_calc::cli::{Cli, Commands};
use rating_calc::commands::{run, Context};
use rating_calc::config::CalcConfig;

fn report(args: &[&str]) -> serde_json::Value {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments should parse");
    let config = CalcConfig::load(cli.config.as_deref()).expect("config should load");
    let ctx = Context::new(&config, cli.as_of);
    run(&cli.command, &ctx).expect("command should succeed")
}

#[test]
fn parses_negative_codes_and_ids() {
    let cli = Cli::try_parse_from(["rating-calc", "format", "1", "--black-id", "-1"]).unwrap();
    match cli.command {
        Commands::Format { code, black_id, .. } => {
            assert_eq!(code, 1);
            assert_eq!(black_id, Some(-1));
        }
        other => panic!("Expected Format, got {:?}", other),
    }

    let cli = Cli::try_parse_from(["rating-calc", "classify", "-3"]).unwrap();
    assert!(matches!(cli.command, Commands::Classify { code: -3 }));
}

#[test]
fn player_and_record_conflict() {
    let result = Cli::try_parse_from([
        "rating-calc",
        "select",
        "--player",
        "anna",
        "--record",
        "{}",
    ]);
    assert!(result.is_err());
}

#[test]
fn select_player_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("calc.toml");
    std::fs::write(
        &config_path,
        r#"
algorithm = 8
as_of = "2025-05-01"

[players.anna]
rating = 2180
rapidRating = 2105
k = 40
birthdate = "2009-03-14"
"#,
    )
    .unwrap();

    let value = report(&[
        "rating-calc",
        "--config",
        config_path.to_str().unwrap(),
        "select",
        "--player",
        "anna",
    ]);

    assert_eq!(value["selection"]["rating"], 2105);
    assert_eq!(value["selection"]["rating_type"], "rapid");
    assert_eq!(value["selection"]["is_fallback"], false);
    // Junior in 2025, rated below 2300.
    assert_eq!(value["k_factor"], 40);
}

#[test]
fn as_of_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("calc.toml");
    std::fs::write(
        &config_path,
        r#"
as_of = "2020-01-01"

[players.kid]
rating = 1900
birthdate = "2005-06-01"
"#,
    )
    .unwrap();
    let config = config_path.to_str().unwrap();

    let junior = report(&["rating-calc", "--config", config, "k-factor", "--player", "kid"]);
    assert_eq!(junior["k_factor"], 40);

    let adult = report(&[
        "rating-calc",
        "--config",
        config,
        "--as-of",
        "2024-01-01",
        "k-factor",
        "--player",
        "kid",
    ]);
    assert_eq!(adult["k_factor"], 20);
}

#[test]
fn tournament_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("open.toml");
    std::fs::write(
        &path,
        r#"
[[matches]]
opponent_rating = 1500
actual_score = 1.0

[[matches]]
opponent_rating = 1500
actual_score = 0.5

[[matches]]
opponent_rating = 1500
actual_score = 0.0

[[matches]]
actual_score = 1.0
"#,
    )
    .unwrap();

    let value = report(&[
        "rating-calc",
        "tournament",
        path.to_str().unwrap(),
        "--rating",
        "1500",
        "-k",
        "20",
    ]);

    assert_eq!(value["games"], 4);
    assert_eq!(value["stats"]["games_with_rated_opponents"], 3);
    assert_eq!(value["stats"]["performance_rating"], 1500);
}

#[test]
fn tournament_report_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("open.json");
    std::fs::write(
        &path,
        r#"[
            {"opponent_rating": 1500, "actual_score": 1.0},
            {"opponent_rating": 1500, "actual_score": 0.5},
            {"opponent_rating": 1500, "actual_score": 0.0},
            {"opponent_rating": 0, "actual_score": 1.0}
        ]"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "rating-calc",
        "tournament",
        path.to_str().unwrap(),
        "--rating",
        "1500",
    ])
    .unwrap();
    let config = CalcConfig::default();
    let value = run(&cli.command, &Context::new(&config, None)).unwrap();

    assert_eq!(value["games"], 4);
    assert_eq!(value["k_factor"], 20);
    assert_eq!(value["stats"]["games_with_rated_opponents"], 3);
    assert_eq!(value["stats"]["performance_rating"], 1500);
    assert_eq!(value["stats"]["total_change"], 0.0);
}

#[test]
fn standings_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.json");
    std::fs::write(
        &path,
        r#"[
            {"white_id": 1, "black_id": 2, "code": 2},
            {"white_id": 3, "black_id": -1, "code": 7}
        ]"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from(["rating-calc", "standings", path.to_str().unwrap()]).unwrap();
    let config = CalcConfig::default();
    let value = run(&cli.command, &Context::new(&config, None)).unwrap();

    let standings = value["standings"].as_array().unwrap();
    assert_eq!(standings.len(), 3);
    assert_eq!(standings[0]["player_id"], 2);
    assert_eq!(standings[0]["points"], 1.0);
    assert_eq!(standings[1]["player_id"], 3);
    assert_eq!(standings[1]["byes"], 1);
    assert_eq!(standings[2]["player_id"], 1);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(CalcConfig::load(Some(&path)).is_err());
}
