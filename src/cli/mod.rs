//! Command-line interface for inspecting the catalog and replaying scripted
//! play sessions.

pub mod commands;
pub mod config;
pub mod output;
