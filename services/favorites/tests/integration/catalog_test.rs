use sea_orm::{ConnectionTrait, SqlErr};

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};
use holonet_domain::id::{CharacterId, PlanetId, UserId, VehicleId};

use holonet_favorites::domain::repository::{CatalogRepository, FavoriteRepository};
use holonet_favorites::domain::types::{CatalogEntry, NewCatalogEntry};
use holonet_favorites::error::FavoritesError;
use holonet_favorites::record::FavoriteRecord;
use holonet_favorites::usecase::catalog::{
    DeleteCatalogEntryUseCase, GetCatalogEntryUseCase, ListCatalogUseCase, SeedCatalogUseCase,
    SeedReport,
};
use holonet_favorites::usecase::favorite::{ListFavoritesUseCase, PruneOrphanedFavoritesUseCase};

use crate::helpers::{
    HOTH, LUKE, SAND_CRAWLER, TATOOINE, catalog_seed, seed_catalog, seeded, setup,
};

#[tokio::test]
async fn should_seed_catalog_once_by_name() {
    let t = setup().await;

    let first = seed_catalog(&t).await;
    assert_eq!(
        first,
        SeedReport {
            inserted: 5,
            skipped: 0
        }
    );

    let second = seed_catalog(&t).await;
    assert_eq!(
        second,
        SeedReport {
            inserted: 0,
            skipped: 5
        }
    );
    assert_eq!(t.catalog.list(FavoriteKind::Planet).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_list_catalog_in_id_order() {
    let t = seeded().await;
    let planets = ListCatalogUseCase {
        repo: t.catalog.clone(),
    }
    .execute(FavoriteKind::Planet)
    .await
    .unwrap();

    let names: Vec<&str> = planets.iter().map(CatalogEntry::name).collect();
    assert_eq!(names, vec!["Tatooine", "Hoth"]);
    assert_eq!(planets[1].target(), FavoriteTarget::Planet(PlanetId(HOTH)));
}

#[tokio::test]
async fn should_surface_duplicate_name_as_unique_violation() {
    let t = seeded().await;
    let tatooine = catalog_seed().planets.remove(0);

    let err = t
        .catalog
        .create(&NewCatalogEntry::Planet(tatooine))
        .await
        .unwrap_err();
    assert!(
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        "expected unique violation, got {err:?}"
    );
}

#[tokio::test]
async fn should_allow_same_name_across_kinds() {
    // Names are unique per table only.
    let t = seeded().await;
    let mut vehicle = catalog_seed().vehicles.remove(0);
    vehicle.name = "Tatooine".into();

    let created = t
        .catalog
        .create(&NewCatalogEntry::Vehicle(vehicle))
        .await
        .unwrap();
    assert_eq!(created.target(), FavoriteTarget::Vehicle(VehicleId(2)));
}

#[tokio::test]
async fn should_keep_favorites_of_deleted_entry_until_pruned() {
    let t = seeded().await;
    let luke = UserId(1);
    let tatooine = FavoriteTarget::Planet(PlanetId(TATOOINE));
    t.favorites.create(luke, tatooine).await.unwrap();
    t.favorites
        .create(luke, FavoriteTarget::Character(CharacterId(LUKE)))
        .await
        .unwrap();

    DeleteCatalogEntryUseCase {
        repo: t.catalog.clone(),
    }
    .execute(tatooine)
    .await
    .unwrap();

    let list = ListFavoritesUseCase {
        users: t.users.clone(),
        catalog: t.catalog.clone(),
        favorites: t.favorites.clone(),
    };
    let resolved = list.execute(luke).await.unwrap();
    assert_eq!(resolved.len(), 2);
    let orphan = serde_json::to_value(FavoriteRecord::from(&resolved[0])).unwrap();
    assert_eq!(orphan["tipo"], "planeta");
    assert!(orphan.get("detalle").is_none());
    assert!(resolved[1].detail.is_some());

    let removed = PruneOrphanedFavoritesUseCase {
        favorites: t.favorites.clone(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(removed, 1);

    let remaining = list.execute(luke).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].favorite.target,
        FavoriteTarget::Character(CharacterId(LUKE))
    );
}

#[tokio::test]
async fn should_prune_orphans_of_every_kind() {
    let t = seeded().await;
    let luke = UserId(1);
    let character = FavoriteTarget::Character(CharacterId(LUKE));
    let planet = FavoriteTarget::Planet(PlanetId(HOTH));
    let vehicle = FavoriteTarget::Vehicle(VehicleId(SAND_CRAWLER));
    for target in [character, planet, vehicle] {
        t.favorites.create(luke, target).await.unwrap();
    }

    assert!(t.catalog.delete(character).await.unwrap());
    assert!(t.catalog.delete(vehicle).await.unwrap());

    assert_eq!(t.favorites.delete_orphans().await.unwrap(), 2);
    assert_eq!(t.favorites.delete_orphans().await.unwrap(), 0);
    let remaining = t.favorites.list_by_user(luke).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].target, planet);
}

#[tokio::test]
async fn should_leave_catalog_untouched_when_seed_fails() {
    let t = setup().await;
    // Characters and planets are inserted first; the vehicle insert then fails.
    t.db.execute_unprepared("DROP TABLE vehiculo").await.unwrap();

    let result = SeedCatalogUseCase {
        repo: t.catalog.clone(),
    }
    .execute(catalog_seed())
    .await;

    assert!(result.is_err());
    assert!(t.catalog.list(FavoriteKind::Character).await.unwrap().is_empty());
    assert!(t.catalog.list(FavoriteKind::Planet).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_report_missing_entry_on_get_and_delete() {
    let t = seeded().await;
    let missing = FavoriteTarget::Planet(PlanetId(999));

    let get = GetCatalogEntryUseCase {
        repo: t.catalog.clone(),
    }
    .execute(missing)
    .await;
    assert!(matches!(get, Err(FavoritesError::CatalogEntryNotFound)));

    let delete = DeleteCatalogEntryUseCase {
        repo: t.catalog.clone(),
    }
    .execute(missing)
    .await;
    assert!(matches!(delete, Err(FavoritesError::CatalogEntryNotFound)));
}
