//! Serialized record shapes.
//!
//! Each entity has one canonical flat field → value mapping. Field names are
//! the persisted column names; the password and the active flag are never
//! part of a record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use holonet_domain::favorite::FavoriteKind;

use crate::domain::types::{CatalogEntry, Character, Planet, ResolvedFavorite, User, Vehicle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    #[serde(serialize_with = "holonet_core::serde::to_rfc3339_ms")]
    pub fecha_suscripcion: DateTime<Utc>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            email: user.email.clone(),
            nombre: user.first_name.clone(),
            apellido: user.last_name.clone(),
            fecha_suscripcion: user.subscribed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    pub id: i32,
    pub nombre: String,
    pub genero: String,
    pub altura: String,
    pub color_pelo: String,
    pub color_piel: String,
    pub color_ojos: String,
}

impl From<&Character> for CharacterRecord {
    fn from(c: &Character) -> Self {
        Self {
            id: c.id.0,
            nombre: c.name.clone(),
            genero: c.gender.clone(),
            altura: c.height.clone(),
            color_pelo: c.hair_color.clone(),
            color_piel: c.skin_color.clone(),
            color_ojos: c.eye_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetRecord {
    pub id: i32,
    pub nombre: String,
    pub clima: String,
    pub terreno: String,
    pub poblacion: String,
}

impl From<&Planet> for PlanetRecord {
    fn from(p: &Planet) -> Self {
        Self {
            id: p.id.0,
            nombre: p.name.clone(),
            clima: p.climate.clone(),
            terreno: p.terrain.clone(),
            poblacion: p.population.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub id: i32,
    pub nombre: String,
    pub modelo: String,
    pub fabricante: String,
    pub costo: String,
    pub longitud: String,
}

impl From<&Vehicle> for VehicleRecord {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id.0,
            nombre: v.name.clone(),
            modelo: v.model.clone(),
            fabricante: v.manufacturer.clone(),
            costo: v.cost.clone(),
            longitud: v.length.clone(),
        }
    }
}

/// Record of any catalog entry; serializes as the bare inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    Character(CharacterRecord),
    Planet(PlanetRecord),
    Vehicle(VehicleRecord),
}

impl From<&CatalogEntry> for CatalogRecord {
    fn from(entry: &CatalogEntry) -> Self {
        match entry {
            CatalogEntry::Character(c) => Self::Character(c.into()),
            CatalogEntry::Planet(p) => Self::Planet(p.into()),
            CatalogEntry::Vehicle(v) => Self::Vehicle(v.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteRecord {
    pub id: i32,
    pub usuario_id: i32,
    pub tipo: FavoriteKind,
    pub objeto_id: i32,
    /// Omitted entirely, not `null`, when the target does not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalle: Option<CatalogRecord>,
}

impl From<&ResolvedFavorite> for FavoriteRecord {
    fn from(resolved: &ResolvedFavorite) -> Self {
        let favorite = &resolved.favorite;
        Self {
            id: favorite.id.0,
            usuario_id: favorite.user_id.0,
            tipo: favorite.target.kind(),
            objeto_id: favorite.target.object_id(),
            detalle: resolved.detail.as_ref().map(CatalogRecord::from),
        }
    }
}
