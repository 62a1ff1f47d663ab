//! ScamGuard Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for ScamGuard: scenario
//! catalogs, quiz sessions, scoring, and achievements. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod achievements;
pub mod constants;
pub mod errors;
pub mod scenarios;
pub mod simulation;

// Re-export common types from the scenario and simulation modules
pub use scenarios::*;
pub use simulation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
