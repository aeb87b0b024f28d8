use crate::entities::reservas;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

/// A reservation whose class reference has already been checked
#[derive(Debug, Clone)]
pub struct NewReserva {
    pub data: String,
    pub sala: i32,
    pub lab: bool,
    pub turma_id: i32,
}

/// A partial update; a supplied `turma_id` must be checked before calling
/// [`ReservaService::update`]
#[derive(Debug, Clone, Default)]
pub struct ReservaChanges {
    pub data: Option<String>,
    pub sala: Option<i32>,
    pub lab: Option<bool>,
    pub turma_id: Option<i32>,
}

impl ReservaChanges {
    pub fn apply(self, active: &mut reservas::ActiveModel) {
        if let Some(data) = self.data {
            active.data = Set(data);
        }
        if let Some(sala) = self.sala {
            active.sala = Set(sala);
        }
        if let Some(lab) = self.lab {
            active.lab = Set(lab);
        }
        if let Some(turma_id) = self.turma_id {
            active.turma_id = Set(turma_id);
        }
    }
}

pub struct ReservaService;

impl ReservaService {
    pub async fn create(
        db: &DatabaseConnection,
        reserva: NewReserva,
    ) -> Result<reservas::Model, DbErr> {
        reservas::ActiveModel {
            id: NotSet,
            data: Set(reserva.data),
            sala: Set(reserva.sala),
            lab: Set(reserva.lab),
            turma_id: Set(reserva.turma_id),
        }
        .insert(db)
        .await
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<reservas::Model>, DbErr> {
        reservas::Entity::find()
            .order_by_asc(reservas::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<reservas::Model, DbErr> {
        reservas::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ReservaChanges,
    ) -> Result<reservas::Model, DbErr> {
        let reserva = Self::get(db, id).await?;

        let mut active: reservas::ActiveModel = reserva.clone().into();
        changes.apply(&mut active);

        if !active.is_changed() {
            return Ok(reserva);
        }

        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = reservas::Entity::delete_by_id(id).exec(db).await?;

        match result.rows_affected {
            0 => Err(Self::not_found(id)),
            _ => Ok(()),
        }
    }

    fn not_found(id: i32) -> DbErr {
        DbErr::RecordNotFound(format!("Reserva com ID {id} não encontrada"))
    }
}
