//! Mira Colors: the state core of a children's color-learning game
//!
//! This crate provides:
//! - The color catalog, mixing rules, palettes, fun facts and mini-game data
//! - Palette progress with stars, mastery and linear unlocking
//! - The challenge selector and the main mixing-quiz state machine
//! - Color-Match and Rainbow-Sequence mini-game sessions
//! - A single reducer behind a [`Store`](store::Store) with a virtual-clock
//!   queue for delayed follow-up actions
//! - Snapshot persistence through MessagePack or in-memory repositories

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod colors;
pub mod error;
pub mod game;
pub mod identifiers;
pub mod minigames;
pub mod mixing;
pub mod palette;
pub mod ports;
pub mod progress;
pub mod reducer;
pub mod selector;
pub mod state;
pub mod store;

pub use app::{App, GameConfig};
pub use catalog::Catalog;
pub use colors::ColorId;
pub use error::{Error, Result};
pub use palette::PaletteId;
pub use reducer::{Action, Notice};
pub use state::AppState;
pub use store::Store;
