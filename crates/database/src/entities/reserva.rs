use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub data: String,
    #[sea_orm(column_name = "num_sala")]
    pub sala: i32,
    pub lab: bool,
    /// Class id owned by the management service, checked on write only
    pub turma_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
