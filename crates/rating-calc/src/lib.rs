//! Rating Calc - a command-line front end for the chess-rating engine.
//!
//! # Modules
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - Runs a subcommand and returns its JSON report
//! - [`config`] - `rating-calc.toml` loading
//! - [`input`] - Tournament and game file loading

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
