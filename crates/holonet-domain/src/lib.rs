//! Domain types shared across Holonet crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; the raw column encoding lives in
//! the schema crates and is converted at the repository boundary.

pub mod favorite;
pub mod id;
