use tracing::{info, warn};

use holonet_domain::favorite::FavoriteTarget;
use holonet_domain::id::{FavoriteId, UserId};

use crate::domain::repository::{CatalogRepository, FavoriteRepository, UserRepository};
use crate::domain::types::{Favorite, ResolvedFavorite};
use crate::error::FavoritesError;

// ── Resolution ───────────────────────────────────────────────────────────────

/// Fetch the catalog row a favorite points at.
///
/// The tagged target selects the one table to query. A missing row is not an
/// error: the favorite comes back with no detail.
pub async fn resolve<C: CatalogRepository>(
    catalog: &C,
    favorite: Favorite,
) -> Result<ResolvedFavorite, FavoritesError> {
    let detail = catalog.find(favorite.target).await?;
    Ok(ResolvedFavorite { favorite, detail })
}

/// Resolve many favorites with at most one query per catalog table.
pub async fn resolve_all<C: CatalogRepository>(
    catalog: &C,
    favorites: Vec<Favorite>,
) -> Result<Vec<ResolvedFavorite>, FavoritesError> {
    let targets: Vec<FavoriteTarget> = favorites.iter().map(|f| f.target).collect();
    let entries = catalog.find_many(&targets).await?;
    Ok(favorites
        .into_iter()
        .map(|favorite| ResolvedFavorite {
            detail: entries.get(&favorite.target).cloned(),
            favorite,
        })
        .collect())
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U, C, F>
where
    U: UserRepository,
    C: CatalogRepository,
    F: FavoriteRepository,
{
    pub users: U,
    pub catalog: C,
    pub favorites: F,
}

impl<U, C, F> AddFavoriteUseCase<U, C, F>
where
    U: UserRepository,
    C: CatalogRepository,
    F: FavoriteRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, FavoritesError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(FavoritesError::UserNotFound);
        }
        if self.catalog.find(target).await?.is_none() {
            return Err(FavoritesError::CatalogEntryNotFound);
        }
        if self
            .favorites
            .find_by_user_and_target(user_id, target)
            .await?
            .is_some()
        {
            return Err(FavoritesError::FavoriteAlreadyExists);
        }
        // A concurrent add can still win the race; the unique index catches it.
        let favorite = match self.favorites.create(user_id, target).await {
            Err(e) if e.is_unique_violation() => {
                return Err(FavoritesError::FavoriteAlreadyExists);
            }
            result => result?,
        };
        info!(favorite_id = %favorite.id, user_id = %user_id, entry = %target, "added favorite");
        Ok(favorite)
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    /// Only the owner can remove a favorite; someone else's favorite is reported
    /// as not found.
    pub async fn execute(
        &self,
        user_id: UserId,
        favorite_id: FavoriteId,
    ) -> Result<(), FavoritesError> {
        if !self.favorites.delete(user_id, favorite_id).await? {
            return Err(FavoritesError::FavoriteNotFound);
        }
        info!(favorite_id = %favorite_id, user_id = %user_id, "removed favorite");
        Ok(())
    }
}

// ── GetFavorite ──────────────────────────────────────────────────────────────

pub struct GetFavoriteUseCase<C: CatalogRepository, F: FavoriteRepository> {
    pub catalog: C,
    pub favorites: F,
}

impl<C: CatalogRepository, F: FavoriteRepository> GetFavoriteUseCase<C, F> {
    pub async fn execute(&self, favorite_id: FavoriteId) -> Result<ResolvedFavorite, FavoritesError> {
        let favorite = self
            .favorites
            .find_by_id(favorite_id)
            .await?
            .ok_or(FavoritesError::FavoriteNotFound)?;
        resolve(&self.catalog, favorite).await
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<U, C, F>
where
    U: UserRepository,
    C: CatalogRepository,
    F: FavoriteRepository,
{
    pub users: U,
    pub catalog: C,
    pub favorites: F,
}

impl<U, C, F> ListFavoritesUseCase<U, C, F>
where
    U: UserRepository,
    C: CatalogRepository,
    F: FavoriteRepository,
{
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<ResolvedFavorite>, FavoritesError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(FavoritesError::UserNotFound);
        }
        let favorites = self.favorites.list_by_user(user_id).await?;
        resolve_all(&self.catalog, favorites).await
    }
}

// ── PruneOrphanedFavorites ───────────────────────────────────────────────────

pub struct PruneOrphanedFavoritesUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> PruneOrphanedFavoritesUseCase<F> {
    pub async fn execute(&self) -> Result<u64, FavoritesError> {
        let removed = self.favorites.delete_orphans().await?;
        if removed > 0 {
            warn!(removed, "pruned orphaned favorites");
        }
        Ok(removed)
    }
}
