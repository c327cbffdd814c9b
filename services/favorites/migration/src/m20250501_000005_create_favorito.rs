use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const KINDS: [&str; 3] = ["personaje", "planeta", "vehiculo"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // (tipo, objeto_id) points into personaje/planeta/vehiculo depending on
        // tipo, so only usuario_id gets a foreign key. tipo is restricted to
        // the three table kinds.
        manager
            .create_table(
                Table::create()
                    .table(Favorito::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorito::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorito::UsuarioId).integer().not_null())
                    .col(
                        ColumnDef::new(Favorito::Tipo)
                            .string_len(50)
                            .not_null()
                            .check(Expr::col(Favorito::Tipo).is_in(KINDS)),
                    )
                    .col(ColumnDef::new(Favorito::ObjetoId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorito_usuario_id")
                            .from(Favorito::Table, Favorito::UsuarioId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Favorito::Table)
                    .col(Favorito::UsuarioId)
                    .col(Favorito::Tipo)
                    .col(Favorito::ObjetoId)
                    .name("idx_favorito_usuario_id_tipo_objeto_id")
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Favorito::Table)
                    .col(Favorito::Tipo)
                    .col(Favorito::ObjetoId)
                    .name("idx_favorito_tipo_objeto_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorito::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favorito {
    Table,
    Id,
    UsuarioId,
    Tipo,
    ObjetoId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
