use serde::Deserialize;

use holonet_core::config::Config;

/// Favorites service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct FavoritesConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Apply pending migrations before running a command (default true).
    /// Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    /// Shortest accepted plaintext password (default 8). Env var: `MIN_PASSWORD_LENGTH`.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Config for FavoritesConfig {}

fn default_run_migrations() -> bool {
    true
}

fn default_min_password_length() -> usize {
    8
}
