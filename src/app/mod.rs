//! Application layer with dependency injection container.
//!
//! The container owns the catalog, the game configuration and the snapshot
//! repository, and creates [`Store`](crate::store::Store)s wired to them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │   App (catalog, config, repository)  │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                       │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - MsgPackRepository                 │   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  │  - StdRng / ScriptedRandom           │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                 │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - SnapshotRepository, RandomSource  │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                    │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - Store / reducer                   │   │
//! │  │  - progress, selector, mini-games    │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use mira_colors::app::App;
//! use mira_colors::reducer::Action;
//! use mira_colors::colors::ColorId;
//!
//! let app = App::new();
//! let mut store = app.create_store();
//! store.dispatch(Action::SelectColor(ColorId::Red));
//! ```
//!
//! ## Testing
//!
//! ```
//! use mira_colors::app::App;
//! use mira_colors::adapters::InMemoryRepository;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build()?;
//! # Ok::<(), mira_colors::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{FollowUpDelays, GameConfig, HapticPatterns, MiniGameLimits};
pub use container::{App, AppBuilder};
