use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "atividades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub descricao: String,
    pub nota: Option<f64>,
    // Both ids live in the management service and are checked on create only
    pub turma_id: i32,
    pub professor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
