//! Engine events reach the installed tracing subscriber.
//!
//! Runs in its own test binary so the capturing subscriber is the first one
//! installed in the process and `init_logging` leaves it in place.

mod helpers;

use helpers::{EnvGuard, run_cli};
use maumau_cli::logging::init_test_logging;
use serial_test::serial;
use tracing::Level;

#[test]
#[serial]
fn sim_emits_setup_and_result_events() {
    let logs = init_test_logging();
    let _env = EnvGuard::clean(&[]);

    let res = run_cli(&["sim", "--games", "2", "--seed", "21"]);
    assert_eq!(res.exit_code, 0);

    let entries = logs.entries();
    let setups = entries
        .iter()
        .filter(|e| e.message.contains("game set up"))
        .count();
    assert_eq!(setups, 2);
    assert!(entries.iter().any(|e| e.level == Level::INFO
        && (e.message.contains("game won") || e.message.contains("turn limit"))));
    assert!(entries
        .iter()
        .any(|e| e.level == Level::DEBUG && e.fields.iter().any(|(k, _)| k == "player")));
}

#[test]
#[serial]
fn turn_limit_is_logged_as_warning() {
    let logs = init_test_logging();
    let _env = EnvGuard::clean(&[("MAUMAU_MAX_TURNS", "3")]);

    let res = run_cli(&["sim", "--games", "1", "--seed", "4"]);
    assert_eq!(res.exit_code, 0);

    let warnings: Vec<_> = logs
        .entries()
        .into_iter()
        .filter(|e| e.level == Level::WARN && e.message.contains("turn limit reached"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].target.starts_with("maumau_engine"));
}

#[test]
#[serial]
fn reshuffles_stay_below_the_default_filter() {
    let logs = init_test_logging();
    let _env = EnvGuard::clean(&[]);

    // four seats on the short deck leave a stock of three, so reshuffles are routine
    let res = run_cli(&["sim", "--games", "5", "--seed", "9", "--players", "4"]);
    assert_eq!(res.exit_code, 0);

    let reshuffles: Vec<_> = logs
        .entries()
        .into_iter()
        .filter(|e| e.message.contains("reshuffling discard pile"))
        .collect();
    assert!(!reshuffles.is_empty());
    assert!(reshuffles.iter().all(|e| e.level == Level::DEBUG));
}
