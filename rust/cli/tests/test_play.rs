mod helpers;

use helpers::{EnvGuard, run_cli};
use maumau_cli::terminal::QUIT_QUESTION;
use serial_test::serial;

const TURN_CAP: &str = "3000";

#[test]
#[serial]
fn demo_game_runs_to_the_end() {
    let _env = EnvGuard::clean(&[("MAUMAU_MAX_TURNS", TURN_CAP)]);
    let res = run_cli(&["play", "--demo", "--seed", "7"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(
        res.stdout
            .contains("Mau-Mau: 3 players, short deck x1, seed 7")
    );
    assert!(res.stdout.contains("is turned up."));
    assert!(res.stdout.contains("Turns played:"));
    assert!(res.stdout.contains("Winner:") || res.stdout.contains("without a winner"));
    assert!(!res.stdout.contains("Your hand"));
}

#[test]
#[serial]
fn demo_games_with_same_seed_print_the_same_transcript() {
    let _env = EnvGuard::clean(&[("MAUMAU_MAX_TURNS", TURN_CAP)]);
    let a = run_cli(&["play", "--demo", "--seed", "1234", "--players", "4", "--copies", "2"]);
    let b = run_cli(&["play", "--demo", "--seed", "1234", "--players", "4", "--copies", "2"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn end_of_input_ends_the_game_without_error() {
    let _env = EnvGuard::clean(&[("MAUMAU_TEST_INPUT", ""), ("MAUMAU_MAX_TURNS", TURN_CAP)]);
    let res = run_cli(&["play", "--seed", "42"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    if res.stdout.contains("Your hand") {
        assert!(res.stdout.contains("Horst ends the game."));
        assert!(res.stdout.contains("Game ended without a winner."));
    }
}

#[test]
#[serial]
fn declining_to_quit_returns_to_the_prompt() {
    let _env = EnvGuard::clean(&[
        ("MAUMAU_TEST_INPUT", "x\nn\n"),
        ("MAUMAU_MAX_TURNS", TURN_CAP),
    ]);
    let res = run_cli(&["play", "--seed", "5", "--players", "2"]);
    assert_eq!(res.exit_code, 0);
    if res.stdout.contains("Your hand") {
        assert_eq!(res.stdout.matches(QUIT_QUESTION).count(), 1);
        // after "n" the prompt comes back, then input runs out
        assert!(res.stdout.matches("(x to quit)").count() >= 2);
        assert!(res.stdout.contains("Horst ends the game."));
    }
}

#[test]
#[serial]
fn empty_slot_is_rejected_with_a_message() {
    let _env = EnvGuard::clean(&[("MAUMAU_TEST_INPUT", "z\n"), ("MAUMAU_MAX_TURNS", TURN_CAP)]);
    let res = run_cli(&["play", "--seed", "11"]);
    assert_eq!(res.exit_code, 0);
    if res.stdout.contains("Your hand") {
        assert!(res.stdout.contains("There is no card in slot z"));
    }
}

#[test]
#[serial]
fn chosen_name_takes_the_last_seat() {
    let _env = EnvGuard::clean(&[("MAUMAU_TEST_INPUT", ""), ("MAUMAU_MAX_TURNS", TURN_CAP)]);
    let res = run_cli(&["play", "--seed", "3", "--name", "Erna"]);
    assert_eq!(res.exit_code, 0);
    let table = res
        .stdout
        .lines()
        .find(|l| l.starts_with("Top:"))
        .expect("table line");
    let fritz = table.find("Fritz").expect("Fritz seated");
    let erna = table.find("Erna").expect("Erna seated");
    assert!(fritz < erna);
}

#[test]
#[serial]
fn table_too_large_for_the_deck_is_refused() {
    let _env = EnvGuard::clean(&[]);
    let res = run_cli(&["play", "--demo", "--players", "5"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn empty_name_is_invalid_input() {
    let _env = EnvGuard::clean(&[]);
    let res = run_cli(&["play", "--name", "  "]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("name must not be empty"));
}
