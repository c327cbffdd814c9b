use sea_orm::entity::prelude::*;

/// Account that owns favorites.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub email: String,
    /// Argon2id PHC string, never the plaintext.
    #[sea_orm(column_type = "Text")]
    pub password: String,
    pub is_active: bool,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub nombre: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub apellido: Option<String>,
    pub fecha_suscripcion: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorito::Entity")]
    Favoritos,
}

impl Related<super::favorito::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favoritos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
