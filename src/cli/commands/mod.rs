//! CLI command implementations

pub mod colors;
pub mod facts;
pub mod mix;
pub mod progress;
pub mod replay;
