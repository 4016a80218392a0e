//! Exit codes returned by [`crate::run`].
//!
//! A game the player quits on purpose still ends with [`SUCCESS`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration, I/O failure or a broken game state.
pub const ERROR: i32 = 2;
