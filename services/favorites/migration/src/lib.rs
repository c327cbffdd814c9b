use sea_orm_migration::prelude::*;

mod m20250501_000001_create_user;
mod m20250501_000002_create_personaje;
mod m20250501_000003_create_planeta;
mod m20250501_000004_create_vehiculo;
mod m20250501_000005_create_favorito;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250501_000001_create_user::Migration),
            Box::new(m20250501_000002_create_personaje::Migration),
            Box::new(m20250501_000003_create_planeta::Migration),
            Box::new(m20250501_000004_create_vehiculo::Migration),
            Box::new(m20250501_000005_create_favorito::Migration),
        ]
    }
}
