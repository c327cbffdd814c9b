pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod password;
pub mod record;
pub mod usecase;
