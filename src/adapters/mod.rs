//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in [`crate::ports`].
//! Adapters depend on the ports, never the other way around.

pub mod in_memory_repository;
pub mod msgpack_repository;
pub mod scripted_random;
pub mod tracing_observer;

pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
pub use scripted_random::ScriptedRandom;
pub use tracing_observer::TracingObserver;
