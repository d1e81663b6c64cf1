//! Ports (trait boundaries) for external dependencies.
//!
//! The domain owns these traits; adapters in the infrastructure layer
//! implement them. Randomness, persistence and dispatch observation are the
//! only collaborators the state machine talks to.

pub mod observer;
pub mod random;
pub mod repository;

pub use observer::Observer;
pub use random::RandomSource;
pub use repository::SnapshotRepository;
