//! Favorite target types.
//!
//! A favorite points at exactly one catalog entity. The persisted row stores
//! that as an untyped (`tipo`, `objeto_id`) pair; in Rust it is a tagged enum so
//! the kind and the id can never disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::{CharacterId, PlanetId, VehicleId};

/// Kind discriminator of a favorite, stored in the `tipo` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FavoriteKind {
    #[serde(rename = "personaje")]
    Character,
    #[serde(rename = "planeta")]
    Planet,
    #[serde(rename = "vehiculo")]
    Vehicle,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [Self::Character, Self::Planet, Self::Vehicle];

    /// Column value and catalog table name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "personaje",
            Self::Planet => "planeta",
            Self::Vehicle => "vehiculo",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed as a [`FavoriteKind`].
#[derive(Debug, Error)]
#[error("unknown favorite kind: {0:?}")]
pub struct UnknownFavoriteKind(pub String);

impl FromStr for FavoriteKind {
    type Err = UnknownFavoriteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personaje" => Ok(Self::Character),
            "planeta" => Ok(Self::Planet),
            "vehiculo" => Ok(Self::Vehicle),
            other => Err(UnknownFavoriteKind(other.to_owned())),
        }
    }
}

/// The catalog entity a favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Character(CharacterId),
    Planet(PlanetId),
    Vehicle(VehicleId),
}

impl FavoriteTarget {
    /// Build a target from its persisted (`tipo`, `objeto_id`) columns.
    pub fn from_parts(kind: &str, object_id: i32) -> Result<Self, UnknownFavoriteKind> {
        Ok(Self::new(kind.parse()?, object_id))
    }

    pub fn new(kind: FavoriteKind, object_id: i32) -> Self {
        match kind {
            FavoriteKind::Character => Self::Character(CharacterId(object_id)),
            FavoriteKind::Planet => Self::Planet(PlanetId(object_id)),
            FavoriteKind::Vehicle => Self::Vehicle(VehicleId(object_id)),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Character(_) => FavoriteKind::Character,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    /// Raw id of the target row, meaningful only together with [`Self::kind`].
    pub fn object_id(&self) -> i32 {
        match self {
            Self::Character(id) => id.0,
            Self::Planet(id) => id.0,
            Self::Vehicle(id) => id.0,
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.object_id())
    }
}

impl From<CharacterId> for FavoriteTarget {
    fn from(id: CharacterId) -> Self {
        Self::Character(id)
    }
}

impl From<PlanetId> for FavoriteTarget {
    fn from(id: PlanetId) -> Self {
        Self::Planet(id)
    }
}

impl From<VehicleId> for FavoriteTarget {
    fn from(id: VehicleId) -> Self {
        Self::Vehicle(id)
    }
}
