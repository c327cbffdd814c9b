use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use holonet_testing::db::migrated_memory_db;
use holonet_testing::fixture::Fixture;

use holonet_favorites::domain::repository::UserRepository;
use holonet_favorites::domain::types::{CatalogSeed, NewUser, User};
use holonet_favorites::infra::db::{DbCatalogRepository, DbFavoriteRepository, DbUserRepository};
use holonet_favorites::usecase::catalog::{SeedCatalogUseCase, SeedReport};

// Ids assigned by `seed_catalog` on a fresh database.
pub const LUKE: i32 = 1;
pub const LEIA: i32 = 2;
pub const TATOOINE: i32 = 1;
pub const HOTH: i32 = 2;
pub const SAND_CRAWLER: i32 = 1;

pub struct TestDb {
    pub db: DatabaseConnection,
    pub users: DbUserRepository,
    pub catalog: DbCatalogRepository,
    pub favorites: DbFavoriteRepository,
}

pub async fn setup() -> TestDb {
    let db = migrated_memory_db()
        .await
        .expect("in-memory database should migrate");
    TestDb {
        users: DbUserRepository { db: db.clone() },
        catalog: DbCatalogRepository { db: db.clone() },
        favorites: DbFavoriteRepository { db: db.clone() },
        db,
    }
}

pub fn catalog_seed() -> CatalogSeed {
    Fixture::load_as("seeds/catalog.json")
}

pub async fn seed_catalog(t: &TestDb) -> SeedReport {
    SeedCatalogUseCase {
        repo: t.catalog.clone(),
    }
    .execute(catalog_seed())
    .await
    .expect("seeding should succeed")
}

pub fn subscribed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1977, 5, 25, 12, 0, 0).unwrap()
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
        is_active: true,
        first_name: None,
        last_name: None,
        subscribed_at: subscribed_at(),
    }
}

pub async fn create_user(t: &TestDb, email: &str) -> User {
    t.users
        .create(&new_user(email))
        .await
        .expect("user should be created")
}

/// Fresh database with the sample catalog and two users (ids 1 and 2).
pub async fn seeded() -> TestDb {
    let t = setup().await;
    seed_catalog(&t).await;
    create_user(&t, "luke@rebels.org").await;
    create_user(&t, "han@falcon.com").await;
    t
}
