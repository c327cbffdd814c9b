use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait, sea_query::Query,
};
use tracing::debug;

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget, UnknownFavoriteKind};
use holonet_domain::id::{CharacterId, FavoriteId, PlanetId, UserId, VehicleId};
use holonet_favorites_schema::{favorito, personaje, planeta, user, vehiculo};

use crate::domain::repository::{CatalogRepository, FavoriteRepository, UserRepository};
use crate::domain::types::{
    CatalogEntry, Character, Favorite, NewCatalogEntry, NewUser, Planet, User, Vehicle,
};
use crate::error::FavoritesError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, FavoritesError> {
        let model = user::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FavoritesError> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, FavoritesError> {
        let model = user::ActiveModel {
            email: Set(new_user.email.clone()),
            password: Set(new_user.password_hash.clone()),
            is_active: Set(new_user.is_active),
            nombre: Set(new_user.first_name.clone()),
            apellido: Set(new_user.last_name.clone()),
            fecha_suscripcion: Set(new_user.subscribed_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: UserId) -> Result<Option<u64>, FavoritesError> {
        let removed = self
            .db
            .transaction::<_, Option<u64>, DbErr>(|txn| {
                Box::pin(async move {
                    // Explicit so the cascade holds even where FK enforcement is off.
                    let favorites = favorito::Entity::delete_many()
                        .filter(favorito::Column::UsuarioId.eq(id.0))
                        .exec(txn)
                        .await?;
                    let users = user::Entity::delete_by_id(id.0).exec(txn).await?;
                    if users.rows_affected == 0 {
                        return Ok(None);
                    }
                    Ok(Some(favorites.rows_affected))
                })
            })
            .await
            .context("delete user with favorites")?;
        Ok(removed)
    }
}

fn user_from_model(model: user::Model) -> User {
    User {
        id: UserId(model.id),
        email: model.email,
        password_hash: model.password,
        is_active: model.is_active,
        first_name: model.nombre,
        last_name: model.apellido,
        subscribed_at: model.fecha_suscripcion,
    }
}

// ── Catalog repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: DatabaseConnection,
}

impl CatalogRepository for DbCatalogRepository {
    async fn find(&self, target: FavoriteTarget) -> Result<Option<CatalogEntry>, FavoritesError> {
        let entry = match target {
            FavoriteTarget::Character(id) => personaje::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find character by id")?
                .map(character_from_model),
            FavoriteTarget::Planet(id) => planeta::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find planet by id")?
                .map(planet_from_model),
            FavoriteTarget::Vehicle(id) => vehiculo::Entity::find_by_id(id.0)
                .one(&self.db)
                .await
                .context("find vehicle by id")?
                .map(vehicle_from_model),
        };
        Ok(entry)
    }

    async fn find_many(
        &self,
        targets: &[FavoriteTarget],
    ) -> Result<HashMap<FavoriteTarget, CatalogEntry>, FavoritesError> {
        let mut character_ids = Vec::new();
        let mut planet_ids = Vec::new();
        let mut vehicle_ids = Vec::new();
        for target in targets {
            match target {
                FavoriteTarget::Character(id) => character_ids.push(id.0),
                FavoriteTarget::Planet(id) => planet_ids.push(id.0),
                FavoriteTarget::Vehicle(id) => vehicle_ids.push(id.0),
            }
        }

        let mut entries = Vec::with_capacity(targets.len());
        if !character_ids.is_empty() {
            let models = personaje::Entity::find()
                .filter(personaje::Column::Id.is_in(character_ids))
                .all(&self.db)
                .await
                .context("find characters by ids")?;
            entries.extend(models.into_iter().map(character_from_model));
        }
        if !planet_ids.is_empty() {
            let models = planeta::Entity::find()
                .filter(planeta::Column::Id.is_in(planet_ids))
                .all(&self.db)
                .await
                .context("find planets by ids")?;
            entries.extend(models.into_iter().map(planet_from_model));
        }
        if !vehicle_ids.is_empty() {
            let models = vehiculo::Entity::find()
                .filter(vehiculo::Column::Id.is_in(vehicle_ids))
                .all(&self.db)
                .await
                .context("find vehicles by ids")?;
            entries.extend(models.into_iter().map(vehicle_from_model));
        }

        Ok(entries
            .into_iter()
            .map(|entry| (entry.target(), entry))
            .collect())
    }

    async fn find_by_name(
        &self,
        kind: FavoriteKind,
        name: &str,
    ) -> Result<Option<CatalogEntry>, FavoritesError> {
        let entry = find_entry_by_name(&self.db, kind, name)
            .await
            .with_context(|| format!("find {kind} by name"))?;
        Ok(entry)
    }

    async fn list(&self, kind: FavoriteKind) -> Result<Vec<CatalogEntry>, FavoritesError> {
        let entries = match kind {
            FavoriteKind::Character => personaje::Entity::find()
                .order_by_asc(personaje::Column::Id)
                .all(&self.db)
                .await
                .context("list characters")?
                .into_iter()
                .map(character_from_model)
                .collect(),
            FavoriteKind::Planet => planeta::Entity::find()
                .order_by_asc(planeta::Column::Id)
                .all(&self.db)
                .await
                .context("list planets")?
                .into_iter()
                .map(planet_from_model)
                .collect(),
            FavoriteKind::Vehicle => vehiculo::Entity::find()
                .order_by_asc(vehiculo::Column::Id)
                .all(&self.db)
                .await
                .context("list vehicles")?
                .into_iter()
                .map(vehicle_from_model)
                .collect(),
        };
        Ok(entries)
    }

    async fn create(&self, entry: &NewCatalogEntry) -> Result<CatalogEntry, FavoritesError> {
        let created = insert_entry(&self.db, entry)
            .await
            .with_context(|| format!("create {}", entry.kind()))?;
        Ok(created)
    }

    async fn create_missing(
        &self,
        entries: &[NewCatalogEntry],
    ) -> Result<Vec<CatalogEntry>, FavoritesError> {
        let inserted = self
            .db
            .transaction::<_, Vec<CatalogEntry>, DbErr>(|txn| {
                let entries = entries.to_vec();
                Box::pin(async move {
                    let mut inserted = Vec::new();
                    for entry in &entries {
                        if find_entry_by_name(txn, entry.kind(), entry.name())
                            .await?
                            .is_some()
                        {
                            debug!(kind = %entry.kind(), name = entry.name(), "catalog entry already present");
                            continue;
                        }
                        inserted.push(insert_entry(txn, entry).await?);
                    }
                    Ok(inserted)
                })
            })
            .await
            .context("create missing catalog entries")?;
        Ok(inserted)
    }

    async fn delete(&self, target: FavoriteTarget) -> Result<bool, FavoritesError> {
        let result = match target {
            FavoriteTarget::Character(id) => personaje::Entity::delete_by_id(id.0)
                .exec(&self.db)
                .await
                .context("delete character")?,
            FavoriteTarget::Planet(id) => planeta::Entity::delete_by_id(id.0)
                .exec(&self.db)
                .await
                .context("delete planet")?,
            FavoriteTarget::Vehicle(id) => vehiculo::Entity::delete_by_id(id.0)
                .exec(&self.db)
                .await
                .context("delete vehicle")?,
        };
        Ok(result.rows_affected > 0)
    }
}

async fn find_entry_by_name<C: ConnectionTrait>(
    conn: &C,
    kind: FavoriteKind,
    name: &str,
) -> Result<Option<CatalogEntry>, DbErr> {
    let entry = match kind {
        FavoriteKind::Character => personaje::Entity::find()
            .filter(personaje::Column::Nombre.eq(name))
            .one(conn)
            .await?
            .map(character_from_model),
        FavoriteKind::Planet => planeta::Entity::find()
            .filter(planeta::Column::Nombre.eq(name))
            .one(conn)
            .await?
            .map(planet_from_model),
        FavoriteKind::Vehicle => vehiculo::Entity::find()
            .filter(vehiculo::Column::Nombre.eq(name))
            .one(conn)
            .await?
            .map(vehicle_from_model),
    };
    Ok(entry)
}

async fn insert_entry<C: ConnectionTrait>(
    conn: &C,
    entry: &NewCatalogEntry,
) -> Result<CatalogEntry, DbErr> {
    let created = match entry {
        NewCatalogEntry::Character(c) => personaje::ActiveModel {
            nombre: Set(c.name.clone()),
            genero: Set(c.gender.clone()),
            altura: Set(c.height.clone()),
            color_pelo: Set(c.hair_color.clone()),
            color_piel: Set(c.skin_color.clone()),
            color_ojos: Set(c.eye_color.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map(character_from_model)?,
        NewCatalogEntry::Planet(p) => planeta::ActiveModel {
            nombre: Set(p.name.clone()),
            clima: Set(p.climate.clone()),
            terreno: Set(p.terrain.clone()),
            poblacion: Set(p.population.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map(planet_from_model)?,
        NewCatalogEntry::Vehicle(v) => vehiculo::ActiveModel {
            nombre: Set(v.name.clone()),
            modelo: Set(v.model.clone()),
            fabricante: Set(v.manufacturer.clone()),
            costo: Set(v.cost.clone()),
            longitud: Set(v.length.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map(vehicle_from_model)?,
    };
    Ok(created)
}

fn character_from_model(model: personaje::Model) -> CatalogEntry {
    CatalogEntry::Character(Character {
        id: CharacterId(model.id),
        name: model.nombre,
        gender: model.genero,
        height: model.altura,
        hair_color: model.color_pelo,
        skin_color: model.color_piel,
        eye_color: model.color_ojos,
    })
}

fn planet_from_model(model: planeta::Model) -> CatalogEntry {
    CatalogEntry::Planet(Planet {
        id: PlanetId(model.id),
        name: model.nombre,
        climate: model.clima,
        terrain: model.terreno,
        population: model.poblacion,
    })
}

fn vehicle_from_model(model: vehiculo::Model) -> CatalogEntry {
    CatalogEntry::Vehicle(Vehicle {
        id: VehicleId(model.id),
        name: model.nombre,
        model: model.modelo,
        manufacturer: model.fabricante,
        cost: model.costo,
        length: model.longitud,
    })
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn find_by_id(&self, id: FavoriteId) -> Result<Option<Favorite>, FavoritesError> {
        let model = favorito::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find favorite by id")?;
        Ok(model.map(favorite_from_model).transpose()?)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, FavoritesError> {
        let models = favorito::Entity::find()
            .filter(favorito::Column::UsuarioId.eq(user_id.0))
            .order_by_asc(favorito::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites by user")?;
        let favorites = models
            .into_iter()
            .map(favorite_from_model)
            .collect::<Result<_, _>>()?;
        Ok(favorites)
    }

    async fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, FavoritesError> {
        let model = favorito::Entity::find()
            .filter(favorito::Column::UsuarioId.eq(user_id.0))
            .filter(favorito::Column::Tipo.eq(target.kind().as_str()))
            .filter(favorito::Column::ObjetoId.eq(target.object_id()))
            .one(&self.db)
            .await
            .context("find favorite by user and target")?;
        Ok(model.map(favorite_from_model).transpose()?)
    }

    async fn create(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, FavoritesError> {
        let model = favorito::ActiveModel {
            usuario_id: Set(user_id.0),
            tipo: Set(target.kind().as_str().to_owned()),
            objeto_id: Set(target.object_id()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create favorite")?;
        Ok(favorite_from_model(model)?)
    }

    async fn delete(&self, user_id: UserId, id: FavoriteId) -> Result<bool, FavoritesError> {
        let result = favorito::Entity::delete_many()
            .filter(favorito::Column::Id.eq(id.0))
            .filter(favorito::Column::UsuarioId.eq(user_id.0))
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_orphans(&self) -> Result<u64, FavoritesError> {
        let removed = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    let mut removed = 0;
                    for kind in FavoriteKind::ALL {
                        let existing_ids = match kind {
                            FavoriteKind::Character => Query::select()
                                .column(personaje::Column::Id)
                                .from(personaje::Entity)
                                .to_owned(),
                            FavoriteKind::Planet => Query::select()
                                .column(planeta::Column::Id)
                                .from(planeta::Entity)
                                .to_owned(),
                            FavoriteKind::Vehicle => Query::select()
                                .column(vehiculo::Column::Id)
                                .from(vehiculo::Entity)
                                .to_owned(),
                        };
                        let result = favorito::Entity::delete_many()
                            .filter(favorito::Column::Tipo.eq(kind.as_str()))
                            .filter(favorito::Column::ObjetoId.not_in_subquery(existing_ids))
                            .exec(txn)
                            .await?;
                        removed += result.rows_affected;
                    }
                    Ok(removed)
                })
            })
            .await
            .context("delete orphaned favorites")?;
        Ok(removed)
    }
}

fn favorite_from_model(model: favorito::Model) -> Result<Favorite, UnknownFavoriteKind> {
    Ok(Favorite {
        id: FavoriteId(model.id),
        user_id: UserId(model.usuario_id),
        target: FavoriteTarget::from_parts(&model.tipo, model.objeto_id)?,
    })
}
