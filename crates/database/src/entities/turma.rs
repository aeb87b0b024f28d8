use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turmas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub descricao: String,
    // Not a foreign key: professors are never checked from here
    pub professor_id: i32,
    pub ativo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
