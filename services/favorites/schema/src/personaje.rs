use sea_orm::entity::prelude::*;

/// Character entry of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personaje")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub genero: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub altura: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color_pelo: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color_piel: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color_ojos: String,
}

// Favorites reference this table through (`tipo`, `objeto_id`), not a foreign key.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
