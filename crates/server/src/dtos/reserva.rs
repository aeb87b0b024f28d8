use database::{
    entities::reservas,
    services::reserva::{NewReserva, ReservaChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{double_option, non_blank, not_null, required, required_text};
use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservaRequest {
    pub data: Option<String>,
    /// Room number
    pub sala: Option<i32>,
    /// Defaults to `false`
    pub lab: Option<bool>,
    /// Class id, checked against the management service
    pub turma_id: Option<i32>,
}

impl CreateReservaRequest {
    pub fn validate(self) -> Result<NewReserva, AppError> {
        Ok(NewReserva {
            data: required_text(self.data, "data")?,
            sala: required(self.sala, "sala")?,
            lab: self.lab.unwrap_or(false),
            turma_id: required(self.turma_id, "turma_id")?,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservaRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub data: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub sala: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<bool>)]
    pub lab: Option<Option<bool>>,
    /// Checked against the management service only when present
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub turma_id: Option<Option<i32>>,
}

impl UpdateReservaRequest {
    pub fn validate(self) -> Result<ReservaChanges, AppError> {
        Ok(ReservaChanges {
            data: non_blank(not_null(self.data, "data")?, "data")?,
            sala: not_null(self.sala, "sala")?,
            lab: not_null(self.lab, "lab")?,
            turma_id: not_null(self.turma_id, "turma_id")?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservaCreated {
    pub id: i32,
    pub sala: i32,
    pub lab: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservaResponse {
    pub id: i32,
    pub data: String,
    pub sala: i32,
    pub lab: bool,
    pub turma_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservaUpdated {
    pub message: String,
    pub reserva: ReservaResponse,
}

impl From<reservas::Model> for ReservaCreated {
    fn from(reserva: reservas::Model) -> Self {
        Self {
            id: reserva.id,
            sala: reserva.sala,
            lab: reserva.lab,
        }
    }
}

impl From<reservas::Model> for ReservaResponse {
    fn from(reserva: reservas::Model) -> Self {
        Self {
            id: reserva.id,
            data: reserva.data,
            sala: reserva.sala,
            lab: reserva.lab,
            turma_id: reserva.turma_id,
        }
    }
}
