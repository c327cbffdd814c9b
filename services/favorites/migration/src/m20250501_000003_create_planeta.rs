use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planeta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planeta::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Planeta::Nombre)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Planeta::Clima).string_len(100).not_null())
                    .col(ColumnDef::new(Planeta::Terreno).string_len(100).not_null())
                    .col(ColumnDef::new(Planeta::Poblacion).string_len(100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planeta::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Planeta {
    Table,
    Id,
    Nombre,
    Clima,
    Terreno,
    Poblacion,
}
