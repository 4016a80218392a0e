//! Shared helpers for the CLI integration tests.
//!
//! - `run_cli` drives [`maumau_cli::run`] with in-memory streams.
//! - `EnvGuard` sets environment variables for one test and restores the
//!   previous values on drop. Tests using it must be `#[serial]`.

#![allow(dead_code)]

/// Exit code and captured output of one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["maumau"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let exit_code = maumau_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Every variable the CLI reads; cleared by [`EnvGuard::clean`].
pub const MAUMAU_VARS: &[&str] = &[
    "MAUMAU_CONFIG",
    "MAUMAU_SEED",
    "MAUMAU_PLAYERS",
    "MAUMAU_HAND_SIZE",
    "MAUMAU_DECK",
    "MAUMAU_COPIES",
    "MAUMAU_MAX_TURNS",
    "MAUMAU_TEST_INPUT",
];

pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every `MAUMAU_*` variable, then applies `pairs`.
    pub fn clean(pairs: &[(&str, &str)]) -> Self {
        let mut guard = EnvGuard {
            restores: Vec::new(),
        };
        for key in MAUMAU_VARS {
            guard.save(key);
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            guard.save(key);
            unsafe {
                std::env::set_var(key, value);
            }
        }
        guard
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.save(key);
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn save(&mut self, key: &str) {
        if self.restores.iter().all(|(k, _)| k != key) {
            self.restores.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
