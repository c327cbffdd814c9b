use sea_orm::entity::prelude::*;

/// Planet entry of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planeta")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub clima: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub terreno: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub poblacion: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
