//! # CLI Layer
//!
//! One possible client for marina. This is the only place that parses
//! arguments, installs the tracing subscriber, prints, and picks exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: colored, width-aware output for `CmdResult` contents

mod commands;
mod print;
mod setup;

pub use commands::run;
