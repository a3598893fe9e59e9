//! Course Registry Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
/// Student/course storage engine
///
/// Holds the collections, the enrollment relation, and the business rules.
pub mod state;
