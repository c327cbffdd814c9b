use tracing::info;

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};

use crate::domain::repository::CatalogRepository;
use crate::domain::types::{CatalogEntry, CatalogSeed, NewCatalogEntry};
use crate::error::FavoritesError;

// ── CreateCatalogEntry ───────────────────────────────────────────────────────

pub struct CreateCatalogEntryUseCase<R: CatalogRepository> {
    pub repo: R,
}

impl<R: CatalogRepository> CreateCatalogEntryUseCase<R> {
    pub async fn execute(&self, entry: NewCatalogEntry) -> Result<CatalogEntry, FavoritesError> {
        let created = self.repo.create(&entry).await?;
        info!(entry = %created.target(), name = created.name(), "created catalog entry");
        Ok(created)
    }
}

// ── GetCatalogEntry ──────────────────────────────────────────────────────────

pub struct GetCatalogEntryUseCase<R: CatalogRepository> {
    pub repo: R,
}

impl<R: CatalogRepository> GetCatalogEntryUseCase<R> {
    pub async fn execute(&self, target: FavoriteTarget) -> Result<CatalogEntry, FavoritesError> {
        self.repo
            .find(target)
            .await?
            .ok_or(FavoritesError::CatalogEntryNotFound)
    }
}

// ── ListCatalog ──────────────────────────────────────────────────────────────

pub struct ListCatalogUseCase<R: CatalogRepository> {
    pub repo: R,
}

impl<R: CatalogRepository> ListCatalogUseCase<R> {
    pub async fn execute(&self, kind: FavoriteKind) -> Result<Vec<CatalogEntry>, FavoritesError> {
        self.repo.list(kind).await
    }
}

// ── DeleteCatalogEntry ───────────────────────────────────────────────────────

pub struct DeleteCatalogEntryUseCase<R: CatalogRepository> {
    pub repo: R,
}

impl<R: CatalogRepository> DeleteCatalogEntryUseCase<R> {
    /// Favorites pointing at the entry are kept; they stop resolving until
    /// orphans are pruned.
    pub async fn execute(&self, target: FavoriteTarget) -> Result<(), FavoritesError> {
        if !self.repo.delete(target).await? {
            return Err(FavoritesError::CatalogEntryNotFound);
        }
        info!(entry = %target, "deleted catalog entry");
        Ok(())
    }
}

// ── SeedCatalog ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

pub struct SeedCatalogUseCase<R: CatalogRepository> {
    pub repo: R,
}

impl<R: CatalogRepository> SeedCatalogUseCase<R> {
    /// Insert every seed entry whose name is not already in its table.
    ///
    /// All or nothing: a failed seed leaves the catalog untouched.
    pub async fn execute(&self, seed: CatalogSeed) -> Result<SeedReport, FavoritesError> {
        let entries: Vec<NewCatalogEntry> = seed.into_entries().collect();
        let inserted = self.repo.create_missing(&entries).await?.len();
        let report = SeedReport {
            inserted,
            skipped: entries.len() - inserted,
        };
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "seeded catalog"
        );
        Ok(report)
    }
}
