//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pq() -> Command {
    Command::cargo_bin("pq").unwrap()
}

/// Create a character named Garg in `dir` and return the save path.
fn new_character(dir: &Path) -> std::path::PathBuf {
    let save = dir.join("garg.json");
    pq().args(["new", "Garg", "--race", "Half Orc", "--class", "Ur-Paladin", "-o"])
        .arg(&save)
        .assert()
        .success();
    save
}

fn read_save(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// -- new --

#[test]
fn new_writes_a_save_file() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("hero.json");
    pq().args(["new", "Garg", "--race", "half orc", "--seed", "7", "-o"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Garg"))
        .stdout(predicate::str::contains("Half Orc"));

    let json = read_save(&save);
    assert_eq!(json["version"], 1);
    assert!(json["saved_at"].is_string());
    assert_eq!(json["character"]["traits"]["name"], "Garg");
    assert_eq!(json["character"]["traits"]["level"], 1);
    assert_eq!(json["character"]["caption"], "Loading...");
    assert_eq!(json["character"]["queue"].as_array().unwrap().len(), 5);
}

#[test]
fn new_generates_a_name_when_none_given() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("anon.json");
    pq().arg("new").arg("-o").arg(&save).assert().success();

    let json = read_save(&save);
    let name = json["character"]["traits"]["name"].as_str().unwrap();
    assert!(!name.is_empty());
    assert!(name.chars().next().unwrap().is_uppercase());
}

#[test]
fn new_is_deterministic_per_seed() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    for path in [&a, &b] {
        pq().args(["new", "--seed", "99", "-o"])
            .arg(path)
            .assert()
            .success();
    }
    assert_eq!(read_save(&a)["character"], read_save(&b)["character"]);
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().args(["new", "Other", "-o"])
        .arg(&save)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pq().args(["new", "Other", "--force", "-o"])
        .arg(&save)
        .assert()
        .success();
    assert_eq!(read_save(&save)["character"]["traits"]["name"], "Other");
}

#[test]
fn new_rejects_unknown_race() {
    let dir = TempDir::new().unwrap();
    pq().args(["new", "Garg", "--race", "Dragonkin", "-o"])
        .arg(dir.path().join("x.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: unknown race"));
}

#[test]
fn new_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    pq().args(["new", "   ", "-o"])
        .arg(dir.path().join("x.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("character name is empty"));
}

// -- run --

#[test]
fn run_advances_and_saves() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().args(["run", "--ticks", "120"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks completed"))
        .stdout(predicate::str::contains("Saved to"));

    let json = read_save(&save);
    assert!(json["character"]["tasks"].as_u64().unwrap() > 5);
    assert!(json["character"]["elapsed"].as_f64().unwrap() > 0.0);
    // The prologue runs out within two minutes of game time.
    assert!(json["character"]["act"].as_u64().unwrap() >= 1);
}

#[test]
fn run_with_events_prints_the_log() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().args(["run", "--ticks", "40", "--events"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Log"))
        .stdout(predicate::str::contains("[task"));
}

#[test]
fn run_resumes_from_saved_progress() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().args(["run", "--ticks", "30"]).arg(&save).assert().success();
    let first = read_save(&save)["character"]["tasks"].as_u64().unwrap();
    pq().args(["run", "--ticks", "30"]).arg(&save).assert().success();
    let second = read_save(&save)["character"]["tasks"].as_u64().unwrap();
    assert!(second > first);
}

#[test]
fn run_missing_save_fails() {
    let dir = TempDir::new().unwrap();
    pq().arg("run")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn run_rejects_malformed_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("bad.json");
    fs::write(&save, "{ not json").unwrap();
    pq().arg("run")
        .arg(&save)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid save file"));
}

#[test]
fn run_rejects_newer_save_version() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());
    let mut json = read_save(&save);
    json["version"] = serde_json::json!(99);
    fs::write(&save, json.to_string()).unwrap();

    pq().arg("run")
        .arg(&save)
        .assert()
        .failure()
        .stderr(predicate::str::contains("newer than supported"));
}

#[test]
fn verbose_run_logs_each_task_to_stderr() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().env_remove("RUST_LOG")
        .args(["--verbose", "run", "--ticks", "20"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("task 2:"));
}

#[test]
fn quiet_run_keeps_stderr_clean() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().env_remove("RUST_LOG")
        .args(["run", "--ticks", "20"])
        .arg(&save)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// -- show --

#[test]
fn show_prints_character_sheet() {
    let dir = TempDir::new().unwrap();
    let save = new_character(dir.path());

    pq().arg("show")
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Garg"))
        .stdout(predicate::str::contains("Ur-Paladin"))
        .stdout(predicate::str::contains("Sharp Rock"))
        .stdout(predicate::str::contains("-3 Burlap"))
        .stdout(predicate::str::contains("HP Max"))
        .stdout(predicate::str::contains("Prologue"))
        .stdout(predicate::str::contains("(no spells)"));
}

#[test]
fn show_repairs_old_saves() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("old.json");
    fs::write(
        &save,
        r#"{
    "version": 1,
    "saved_at": "2024-01-01T00:00:00Z",
    "character": {
        "traits": {"name": "Old", "race": "Half Man", "class": "Robot Monk", "level": 4},
        "stats": {"STR": 10},
        "act": 2
    }
}"#,
    )
    .unwrap();

    pq().arg("show")
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gold"))
        .stdout(predicate::str::contains("Act I"))
        .stdout(predicate::str::contains("Act II"))
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("repaired saved character: seed_gold"));
}

// -- tables --

#[test]
fn tables_dump_is_valid_json() {
    let output = pq().arg("tables").assert().success();
    let json: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert!(json["monsters"].as_array().unwrap().len() > 100);
    assert!(json["races"].is_array());
    assert!(json["spells"].is_array());
}

#[test]
fn tables_roundtrip_through_content_flag() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("tables.json");
    pq().args(["tables", "-o"])
        .arg(&tables)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote content tables"));

    // Narrow the race pool to a single custom entry.
    let mut json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&tables).unwrap()).unwrap();
    json["races"] = serde_json::json!(["Moss Gnome|WIS"]);
    fs::write(&tables, json.to_string()).unwrap();

    let save = dir.path().join("gnome.json");
    pq().args(["new", "Pip", "--content"])
        .arg(&tables)
        .arg("-o")
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Moss Gnome"));

    pq().args(["run", "--ticks", "10", "--content"])
        .arg(&tables)
        .arg(&save)
        .assert()
        .success();
}

#[test]
fn empty_content_pool_is_rejected() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("tables.json");
    fs::write(&tables, r#"{"monsters": []}"#).unwrap();

    pq().args(["new", "Pip", "--content"])
        .arg(&tables)
        .arg("-o")
        .arg(dir.path().join("x.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("monsters"));
}
