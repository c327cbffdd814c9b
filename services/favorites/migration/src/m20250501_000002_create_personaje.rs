use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Personaje::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Personaje::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Personaje::Nombre)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Personaje::Genero).string_len(50).not_null())
                    .col(ColumnDef::new(Personaje::Altura).string_len(50).not_null())
                    .col(ColumnDef::new(Personaje::ColorPelo).string_len(50).not_null())
                    .col(ColumnDef::new(Personaje::ColorPiel).string_len(50).not_null())
                    .col(ColumnDef::new(Personaje::ColorOjos).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Personaje::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Personaje {
    Table,
    Id,
    Nombre,
    Genero,
    Altura,
    ColorPelo,
    ColorPiel,
    ColorOjos,
}
