#![allow(async_fn_in_trait)]

use std::collections::HashMap;

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};
use holonet_domain::id::{FavoriteId, UserId};

use crate::domain::types::{CatalogEntry, Favorite, NewCatalogEntry, NewUser, User};
use crate::error::FavoritesError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, FavoritesError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FavoritesError>;

    /// Insert a user. A duplicate email surfaces as the store's unique violation.
    async fn create(&self, user: &NewUser) -> Result<User, FavoritesError>;

    /// Delete a user and all of its favorites in one transaction.
    /// Returns the number of favorites removed, or `None` if no such user exists.
    async fn delete(&self, id: UserId) -> Result<Option<u64>, FavoritesError>;
}

/// Repository for the three catalog tables.
pub trait CatalogRepository: Send + Sync {
    /// Look up the single row a target points at.
    async fn find(&self, target: FavoriteTarget) -> Result<Option<CatalogEntry>, FavoritesError>;

    /// Batch form of [`Self::find`]: at most one query per catalog table.
    /// Targets without a row are absent from the map.
    async fn find_many(
        &self,
        targets: &[FavoriteTarget],
    ) -> Result<HashMap<FavoriteTarget, CatalogEntry>, FavoritesError>;

    async fn find_by_name(
        &self,
        kind: FavoriteKind,
        name: &str,
    ) -> Result<Option<CatalogEntry>, FavoritesError>;

    async fn list(&self, kind: FavoriteKind) -> Result<Vec<CatalogEntry>, FavoritesError>;

    /// Insert a catalog row. A duplicate name surfaces as the store's unique violation.
    async fn create(&self, entry: &NewCatalogEntry) -> Result<CatalogEntry, FavoritesError>;

    /// Insert, in one transaction, every entry whose name is not yet in its
    /// table. Returns the inserted entries; on error nothing is inserted.
    async fn create_missing(
        &self,
        entries: &[NewCatalogEntry],
    ) -> Result<Vec<CatalogEntry>, FavoritesError>;

    /// Delete a catalog row. Favorites pointing at it are left in place.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, target: FavoriteTarget) -> Result<bool, FavoritesError>;
}

/// Repository for favorites.
pub trait FavoriteRepository: Send + Sync {
    async fn find_by_id(&self, id: FavoriteId) -> Result<Option<Favorite>, FavoritesError>;

    /// All favorites of a user, oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, FavoritesError>;

    async fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, FavoritesError>;

    /// A second favorite of the same target by the same user surfaces as the
    /// store's unique violation.
    async fn create(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, FavoritesError>;

    /// Delete a favorite owned by `user_id`. Returns `true` if a row was deleted.
    async fn delete(&self, user_id: UserId, id: FavoriteId) -> Result<bool, FavoritesError>;

    /// Delete favorites whose target row no longer exists, in one transaction.
    /// Returns the number of rows removed.
    async fn delete_orphans(&self) -> Result<u64, FavoritesError>;
}
