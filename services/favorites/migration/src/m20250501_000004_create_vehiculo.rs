use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehiculo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehiculo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Vehiculo::Nombre)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehiculo::Modelo).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Vehiculo::Fabricante)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehiculo::Costo).string_len(50).not_null())
                    .col(ColumnDef::new(Vehiculo::Longitud).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehiculo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vehiculo {
    Table,
    Id,
    Nombre,
    Modelo,
    Fabricante,
    Costo,
    Longitud,
}
