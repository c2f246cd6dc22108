//! Ports (trait boundaries) for external dependencies.
//!
//! The engine itself knows nothing about storage, opponents, or reporting.
//! These traits are owned by the domain and implemented by adapters.

pub mod observer;
pub mod opponent;
pub mod repository;

pub use observer::Observer;
pub use opponent::Opponent;
pub use repository::StrategyRepository;
