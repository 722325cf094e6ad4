//! farepath CLI library.
//!
//! Holds the interactive console loop and the subcommand handlers so they can
//! be exercised without spawning the binary.

pub mod commands;
pub mod console;
