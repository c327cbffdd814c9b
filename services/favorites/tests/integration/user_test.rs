use sea_orm::{EntityTrait, SqlErr};

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};
use holonet_domain::id::{CharacterId, PlanetId, UserId};
use holonet_favorites_schema::{favorito, user};
use holonet_testing::fixture::Fixture;

use holonet_favorites::domain::repository::{CatalogRepository, FavoriteRepository, UserRepository};
use holonet_favorites::domain::types::NewUser;
use holonet_favorites::error::FavoritesError;
use holonet_favorites::password::verify_password;
use holonet_favorites::record::UserRecord;
use holonet_favorites::usecase::user::{CreateUserInput, CreateUserUseCase, DeleteUserUseCase};

use crate::helpers::{HOTH, LEIA, LUKE, create_user, new_user, seeded, setup, subscribed_at};

#[tokio::test]
async fn should_serialize_user_like_contract() {
    let t = setup().await;
    let user = t
        .users
        .create(&NewUser {
            first_name: Some("Luke".into()),
            last_name: Some("Skywalker".into()),
            ..new_user("luke@rebels.org")
        })
        .await
        .unwrap();

    assert_eq!(user.subscribed_at, subscribed_at());
    let json = serde_json::to_value(UserRecord::from(&user)).unwrap();
    assert_eq!(json, Fixture::load("contracts/favorites/user.json"));
}

#[tokio::test]
async fn should_store_hashed_password_for_new_user() {
    let t = setup().await;
    let usecase = CreateUserUseCase {
        repo: t.users.clone(),
        min_password_length: 8,
    };
    let user = usecase
        .execute(CreateUserInput {
            email: "leia@alderaan.gov".into(),
            password: "help-me-obi-wan".into(),
            first_name: Some("Leia".into()),
            last_name: None,
        })
        .await
        .unwrap();

    let stored = t
        .users
        .find_by_email("leia@alderaan.gov")
        .await
        .unwrap()
        .expect("user should be persisted");
    assert_eq!(stored.id, user.id);
    assert!(stored.is_active);
    assert!(stored.password_hash.starts_with("$argon2id$"));
    assert!(verify_password("help-me-obi-wan", &stored.password_hash).unwrap());
    assert!(!verify_password("wrong-password", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn should_surface_duplicate_email_as_unique_violation() {
    let t = setup().await;
    create_user(&t, "luke@rebels.org").await;

    let err = t.users.create(&new_user("luke@rebels.org")).await.unwrap_err();
    assert_eq!(err.kind(), "INTERNAL");
    assert!(
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        "expected unique violation, got {err:?}"
    );
}

#[tokio::test]
async fn should_delete_user_favorites_but_keep_catalog() {
    let t = seeded().await;
    let luke = UserId(1);
    let han = UserId(2);
    t.favorites
        .create(luke, FavoriteTarget::Character(CharacterId(LUKE)))
        .await
        .unwrap();
    t.favorites
        .create(luke, FavoriteTarget::Planet(PlanetId(HOTH)))
        .await
        .unwrap();
    t.favorites
        .create(han, FavoriteTarget::Character(CharacterId(LEIA)))
        .await
        .unwrap();

    let removed = DeleteUserUseCase {
        repo: t.users.clone(),
    }
    .execute(luke)
    .await
    .unwrap();

    assert_eq!(removed, 2);
    assert!(t.users.find_by_id(luke).await.unwrap().is_none());
    assert!(t.favorites.list_by_user(luke).await.unwrap().is_empty());
    assert_eq!(t.favorites.list_by_user(han).await.unwrap().len(), 1);
    assert_eq!(t.catalog.list(FavoriteKind::Character).await.unwrap().len(), 2);
    assert_eq!(t.catalog.list(FavoriteKind::Planet).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_cascade_user_row_delete_to_favorites() {
    // Bypasses the repository so only the foreign key removes the favorites.
    let t = seeded().await;
    let luke = UserId(1);
    let han = UserId(2);
    t.favorites
        .create(luke, FavoriteTarget::Character(CharacterId(LUKE)))
        .await
        .unwrap();
    t.favorites
        .create(luke, FavoriteTarget::Planet(PlanetId(HOTH)))
        .await
        .unwrap();
    t.favorites
        .create(han, FavoriteTarget::Planet(PlanetId(HOTH)))
        .await
        .unwrap();

    let deleted = user::Entity::delete_by_id(luke.0).exec(&t.db).await.unwrap();
    assert_eq!(deleted.rows_affected, 1);

    let remaining = favorito::Entity::find().all(&t.db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].usuario_id, han.0);
    assert_eq!(t.catalog.list(FavoriteKind::Character).await.unwrap().len(), 2);
    assert_eq!(t.catalog.list(FavoriteKind::Planet).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_return_user_not_found_when_deleting_twice() {
    let t = setup().await;
    let user = create_user(&t, "luke@rebels.org").await;
    let usecase = DeleteUserUseCase {
        repo: t.users.clone(),
    };

    assert_eq!(usecase.execute(user.id).await.unwrap(), 0);
    let second = usecase.execute(user.id).await;
    assert!(matches!(second, Err(FavoritesError::UserNotFound)));
}
