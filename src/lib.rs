//! # Connect Four Replay
//!
//! Plays out a recorded list of Connect Four moves and reports the outcome:
//! a win for either player, a draw, or an unfinished game.
//!
//! ## Modules
//!
//! - [`game`]: Board engine, move tokens, observers, move sequencer
//! - [`ui`]: Console observer that prints results
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
