use sea_orm::entity::prelude::*;

/// Vehicle entry of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehiculo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub modelo: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub fabricante: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub costo: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub longitud: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
