use chrono::{DateTime, Utc};
use serde::Deserialize;

use holonet_domain::favorite::{FavoriteKind, FavoriteTarget};
use holonet_domain::id::{CharacterId, FavoriteId, PlanetId, UserId, VehicleId};

/// Account that owns favorites.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

/// A user row before the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost: String,
    pub length: String,
}

/// Any favoritable catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Character(Character),
    Planet(Planet),
    Vehicle(Vehicle),
}

impl CatalogEntry {
    pub fn target(&self) -> FavoriteTarget {
        match self {
            Self::Character(c) => FavoriteTarget::Character(c.id),
            Self::Planet(p) => FavoriteTarget::Planet(p.id),
            Self::Vehicle(v) => FavoriteTarget::Vehicle(v.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Character(c) => &c.name,
            Self::Planet(p) => &p.name,
            Self::Vehicle(v) => &v.name,
        }
    }
}

// The `New*` catalog types double as the seed-file format, so they carry the
// persisted column names.

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCharacter {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "altura")]
    pub height: String,
    #[serde(rename = "color_pelo")]
    pub hair_color: String,
    #[serde(rename = "color_piel")]
    pub skin_color: String,
    #[serde(rename = "color_ojos")]
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPlanet {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "clima")]
    pub climate: String,
    #[serde(rename = "terreno")]
    pub terrain: String,
    #[serde(rename = "poblacion")]
    pub population: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewVehicle {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    #[serde(rename = "costo")]
    pub cost: String,
    #[serde(rename = "longitud")]
    pub length: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewCatalogEntry {
    Character(NewCharacter),
    Planet(NewPlanet),
    Vehicle(NewVehicle),
}

impl NewCatalogEntry {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Character(_) => FavoriteKind::Character,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Character(c) => &c.name,
            Self::Planet(p) => &p.name,
            Self::Vehicle(v) => &v.name,
        }
    }
}

/// Catalog seed file: `{"personajes": [...], "planetas": [...], "vehiculos": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default, rename = "personajes")]
    pub characters: Vec<NewCharacter>,
    #[serde(default, rename = "planetas")]
    pub planets: Vec<NewPlanet>,
    #[serde(default, rename = "vehiculos")]
    pub vehicles: Vec<NewVehicle>,
}

impl CatalogSeed {
    pub fn into_entries(self) -> impl Iterator<Item = NewCatalogEntry> {
        let characters = self.characters.into_iter().map(NewCatalogEntry::Character);
        let planets = self.planets.into_iter().map(NewCatalogEntry::Planet);
        let vehicles = self.vehicles.into_iter().map(NewCatalogEntry::Vehicle);
        characters.chain(planets).chain(vehicles)
    }
}

/// A user's favorite, pointing at exactly one catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

/// A favorite together with the catalog row it points at.
///
/// `detail` is `None` when the target row does not exist (orphaned favorite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFavorite {
    pub favorite: Favorite,
    pub detail: Option<CatalogEntry>,
}

/// Loose shape check for an email address: one `@`, a non-empty local part,
/// a dotted domain, at most 120 characters.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > 120 {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}
