//! Command-line shell around `baccarat-core`: YAML configuration, structured
//! logging, keypad parsing and report rendering.

pub mod config;
pub mod keypad;
pub mod logging;
pub mod report;
