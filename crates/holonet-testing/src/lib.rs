//! Test utilities for Holonet crates.
//!
//! Provides an in-memory migrated database and the JSON fixture loader.
//! Import from `[dev-dependencies]` only.

pub mod db;
pub mod fixture;
