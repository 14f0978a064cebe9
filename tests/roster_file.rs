use std::path::PathBuf;

use penalty_sim::SimError;
use penalty_sim::config::{Args, SimConfig};
use penalty_sim::roster::Roster;

fn data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data");
    path.push(name);
    path
}

#[test]
fn example_roster_file_loads_in_order() {
    let roster = Roster::from_json_file(&data_path("roster_example.json"))
        .expect("example roster should load");
    assert_eq!(roster.names(), vec!["Ana", "Bea", "Cruz", "Dani"]);
}

#[test]
fn roster_flag_replaces_default_players() {
    let path = data_path("roster_example.json");
    let args = <Args as clap::Parser>::try_parse_from([
        "penalty_sim",
        "--roster",
        path.to_str().expect("utf-8 path"),
    ])
    .expect("args should parse");
    let cfg = SimConfig::from_args(&args).unwrap();
    assert_eq!(cfg.roster.len(), 4);
}

#[test]
fn missing_roster_file_is_an_io_error() {
    let err = Roster::from_json_file(&data_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
}
