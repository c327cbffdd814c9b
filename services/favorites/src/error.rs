use sea_orm::{DbErr, SqlErr, TransactionError};

use holonet_domain::favorite::UnknownFavoriteKind;

/// Favorites service error variants.
///
/// Store failures are not translated: they travel inside [`Self::Internal`]
/// with the failing operation attached as context, and [`Self::sql_err`]
/// exposes the underlying constraint violation when there is one.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("user not found")]
    UserNotFound,
    #[error("catalog entry not found")]
    CatalogEntryNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("favorite already exists")]
    FavoriteAlreadyExists,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {min_length} characters long")]
    WeakPassword { min_length: usize },
    #[error(transparent)]
    UnknownFavoriteKind(#[from] UnknownFavoriteKind),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl FavoritesError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CatalogEntryNotFound => "CATALOG_ENTRY_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::FavoriteAlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::UnknownFavoriteKind(_) => "UNKNOWN_FAVORITE_KIND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    /// The store's own constraint error, if this error wraps one.
    pub fn sql_err(&self) -> Option<SqlErr> {
        let Self::Internal(e) = self else {
            return None;
        };
        if let Some(db_err) = e.downcast_ref::<DbErr>() {
            return db_err.sql_err();
        }
        match e.downcast_ref::<TransactionError<DbErr>>()? {
            TransactionError::Connection(db_err) | TransactionError::Transaction(db_err) => {
                db_err.sql_err()
            }
        }
    }
}
