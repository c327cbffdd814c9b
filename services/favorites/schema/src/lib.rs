//! sea-orm entities for the favorites catalog tables.
//!
//! Column names follow the persisted layout (`user`, `personaje`, `planeta`,
//! `vehiculo`, `favorito`). `favorito` keeps the raw (`tipo`, `objeto_id`)
//! pair; typed targets live in `holonet-domain`.

pub mod favorito;
pub mod personaje;
pub mod planeta;
pub mod user;
pub mod vehiculo;

pub mod prelude {
    pub use super::favorito::Entity as Favorito;
    pub use super::personaje::Entity as Personaje;
    pub use super::planeta::Entity as Planeta;
    pub use super::user::Entity as User;
    pub use super::vehiculo::Entity as Vehiculo;
}
