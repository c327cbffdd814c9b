//! Newtype wrappers for domain identifiers.
//!
//! Every table keys its rows with an auto-incremented integer, so the wrappers
//! all hold an `i32`. Keeping them distinct stops a planet id from being passed
//! where a character id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

integer_id!(
    /// Identifies a user account.
    UserId
);

integer_id!(
    /// Identifies a character (`personaje`) in the catalog.
    CharacterId
);

integer_id!(
    /// Identifies a planet (`planeta`) in the catalog.
    PlanetId
);

integer_id!(
    /// Identifies a vehicle (`vehiculo`) in the catalog.
    VehicleId
);

integer_id!(
    /// Identifies a favorite (`favorito`) record.
    FavoriteId
);
