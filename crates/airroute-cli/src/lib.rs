//! Airroute CLI library.
//!
//! Argument types, subcommand handlers, logging setup and terminal output for
//! the `airroute` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
