//! Integration tests for CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn th(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("th").unwrap();
    cmd.arg("--data-dir").arg(data.path());
    cmd
}

// ---------------------------------------------------------------------------
// gameplay
// ---------------------------------------------------------------------------

#[test]
fn complete_grants_rewards_and_levels_up() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["complete", "forest", "--player", "p1", "--name", "Ada"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("+100 xp")
                .and(predicate::str::contains("+50 coins"))
                .and(predicate::str::contains("Now level 2"))
                .and(predicate::str::contains("Rank #1")),
        );

    assert!(data.path().join("gameProgress_p1.json").exists());
    assert!(data.path().join("treasureRankings.json").exists());
}

#[test]
fn complete_twice_is_reported() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["complete", "forest", "-p", "p1"])
        .assert()
        .success();
    th(&data)
        .args(["complete", "forest", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already completed"));
    th(&data)
        .args(["status", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coins:      50"));
}

#[test]
fn fragments_are_counted_once() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["fragment", "moon-shard", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1/3)"));
    th(&data)
        .args(["fragment", "moon-shard", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already collected"));
    th(&data)
        .args(["status", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fragments:  1/3"));
}

#[test]
fn damage_until_defeated() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["damage", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hp 2/3"));
    th(&data)
        .args(["damage", "5", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Defeated!"));
}

#[test]
fn negative_damage_changes_nothing() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["damage", "-2", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hp 3/3"));
}

#[test]
fn corrupt_save_is_ignored() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("gameProgress_p1.json"), "{broken").unwrap();
    th(&data)
        .args(["status", "-p", "p1", "-n", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada").and(predicate::str::contains("level:      1")));
}

// ---------------------------------------------------------------------------
// rankings & views
// ---------------------------------------------------------------------------

#[test]
fn rankings_empty() {
    let data = TempDir::new().unwrap();
    th(&data)
        .arg("rankings")
        .assert()
        .success()
        .stdout(predicate::str::contains("No rankings yet"));
}

#[test]
fn rankings_order_players() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["complete", "a", "-p", "p1", "-n", "Ada"])
        .assert()
        .success();
    th(&data)
        .args(["fragment", "f1", "-p", "p2", "-n", "Bo"])
        .assert()
        .success();
    th(&data)
        .args(["complete", "a", "-p", "p2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank #1"));

    let out = th(&data).arg("rankings").assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let bo = stdout.find("Bo").unwrap();
    let ada = stdout.find("Ada").unwrap();
    assert!(bo < ada, "Bo should rank above Ada:\n{stdout}");
    assert!(stdout.contains("2 players"));
}

#[test]
fn view_ranking_route() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["view", "/ranking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RankingPage (/ranking)"));
}

#[test]
fn view_home_route_needs_player() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["view", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GameHome needs --player"));
    th(&data)
        .args(["view", "/", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fragments:  0/3"));
}

#[test]
fn view_user_route() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["view", "/user/", "-p", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UserCenter").and(predicate::str::contains("unranked")));
}

#[test]
fn view_unknown_route_fails() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["view", "/shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route for path"));
}

// ---------------------------------------------------------------------------
// mechanics
// ---------------------------------------------------------------------------

#[test]
fn riddle_hard_checks_guess() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["riddle", "hard", "--seed", "1", "--guess", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[hard]").and(predicate::str::contains("Correct!")));
}

#[test]
fn riddle_unknown_difficulty_is_easy() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["riddle", "impossible", "-s", "3", "-g", "Clothes"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[easy]").and(predicate::str::contains("The answer was Water")),
        );
}

#[test]
fn special_attack_deals_two() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["attack", "special", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("for 2"));
}

#[test]
fn agile_defender_always_dodges() {
    let data = TempDir::new().unwrap();
    th(&data)
        .args(["attack", "--agility", "25", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dodges"));
}
