use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{PRAGUE_FEED, no_config, rta, temp_path, write_feed};

#[test]
fn test_show_prague_feed() {
    let cfg = no_config("show_all");
    let feed = write_feed("show_all", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed])
        .assert()
        .success()
        .stdout(contains("Region 1 · 2025-08-06 (Wed) · Day 1"))
        .stdout(contains("Region 2 · 2025-08-06 (Wed) · Day 1"))
        .stdout(contains("Region 1 · 2025-08-07 (Thu) · Day 2"))
        .stdout(contains("이동 (15 min)"))
        .stdout(contains("프라하 성 → 카를교"))
        .stdout(contains("자유시간"))
        .stdout(contains("2 travel segments (20 min)"))
        .stdout(contains("2 free-time slots"));
}

#[test]
fn test_show_wraps_descriptions() {
    let cfg = no_config("show_desc");
    let feed = write_feed("show_desc", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--region", "1"])
        .assert()
        .success()
        .stdout(contains("황금소로를"));
}

#[test]
fn test_show_single_region() {
    let cfg = no_config("show_region");
    let feed = write_feed("show_region", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--region", "2"])
        .assert()
        .success()
        .stdout(contains("국립 박물관"))
        .stdout(contains("바츨라프 광장 → 국립 박물관"))
        .stdout(contains("카를교").not());
}

#[test]
fn test_show_default_region_from_config() {
    let cfg = temp_path("show_cfg_region", "conf");
    fs::write(&cfg, "default_region: \"2\"\n").expect("write config");
    let feed = write_feed("show_cfg_region", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed])
        .assert()
        .success()
        .stdout(contains("Region 2"))
        .stdout(contains("Region 1").not());
}

#[test]
fn test_show_single_date_keeps_trip_day_numbers() {
    let cfg = no_config("show_date");
    let feed = write_feed("show_date", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--date", "2025-08-07", "--by", "date"])
        .assert()
        .success()
        .stdout(contains("2025-08-07 (Thu) · Day 2"))
        .stdout(contains("프라하 공항 출국"))
        .stdout(contains("2025-08-06").not());
}

#[test]
fn test_show_grouped_by_region() {
    let cfg = no_config("show_by_region");
    let feed = write_feed("show_by_region", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--by", "region"])
        .assert()
        .success()
        .stdout(contains("=== Region 1 ==="))
        .stdout(contains("=== Region 2 ==="));
}

#[test]
fn test_show_all_in_one_table() {
    let cfg = no_config("show_by_all");
    let feed = write_feed("show_by_all", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--by", "all"])
        .assert()
        .success()
        .stdout(contains("=== Agenda ==="))
        .stdout(contains("DATE"))
        .stdout(contains("REG"));
}

#[test]
fn test_show_range_without_matches() {
    let cfg = no_config("show_range_empty");
    let feed = write_feed("show_range_empty", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No schedule entries found."));
}

#[test]
fn test_show_invalid_date() {
    let cfg = no_config("show_bad_date");
    let feed = write_feed("show_bad_date", PRAGUE_FEED);

    rta()
        .args(["--config", &cfg, "show", &feed, "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_show_bad_feed() {
    let cfg = no_config("show_bad_feed");
    let feed = write_feed("show_bad_feed", r#"{"rows": 3}"#);

    rta()
        .args(["--config", &cfg, "show", &feed])
        .assert()
        .failure()
        .stderr(contains("Unrecognized schedule feed"));
}

#[test]
fn test_show_missing_feed_file() {
    let cfg = no_config("show_no_file");
    let missing = temp_path("show_no_file", "json");

    rta()
        .args(["--config", &cfg, "show", &missing])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_travel_lookup() {
    let cfg = no_config("travel");

    rta()
        .args(["--config", &cfg, "travel", "프라하 성", "카를교"])
        .assert()
        .success()
        .stdout(contains("프라하 성 → 카를교: 15 min"));

    rta()
        .args(["--config", &cfg, "travel", "Unknown A", "Unknown B"])
        .assert()
        .success()
        .stdout(contains("20 min"));

    rta()
        .args(["--config", &cfg, "travel", "프라하", "체스키크룸로프"])
        .assert()
        .success()
        .stdout(contains("3h 00m"));
}

#[test]
fn test_init_and_config_commands() {
    let cfg = temp_path("init_cfg", "conf");

    rta()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    rta()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rta()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();

    rta()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    rta()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("free_time_label"))
        .stdout(contains("travel_default_minutes: 20"));
}

#[test]
fn test_config_migrate_fills_old_file() {
    let cfg = temp_path("migrate_cfg", "conf");
    fs::write(&cfg, "default_region: \"1\"\n").expect("write config");

    rta()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing keys"))
        .stdout(contains("free_time_minutes"));

    rta()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added keys"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("default_region: '1'") || content.contains("default_region: \"1\""));
    assert!(content.contains("free_time_ceiling_hour: 22"));
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = temp_path("broken_cfg", "conf");
    fs::write(&cfg, "free_time_ceiling_hour: [1, 2]\n").expect("write config");

    rta()
        .args(["--config", &cfg, "travel", "a", "b"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
