use axum::{Json, extract::State, http::StatusCode};
use database::services::reserva::ReservaService;
use management_client::ensure_exists;
use models::collection::RemoteCollection;

use crate::{
    dtos::{
        ErrorResponse, MessageResponse,
        reserva::{
            CreateReservaRequest, ReservaCreated, ReservaResponse, ReservaUpdated,
            UpdateReservaRequest,
        },
    },
    error::AppError,
    state::DependentState,
    utils::{json::AppJson, path::AppPath},
};

/// Create a room reservation
///
/// The class is looked up in the management service first; nothing is stored
/// unless it exists there.
#[utoipa::path(
    post,
    path = "/reservas",
    request_body = CreateReservaRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservaCreated),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Class not found in the management service", body = ErrorResponse),
        (status = 500, description = "Management service could not be reached", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn create_reserva(
    State(state): State<DependentState>,
    AppJson(body): AppJson<CreateReservaRequest>,
) -> Result<(StatusCode, Json<ReservaCreated>), AppError> {
    let reserva = body.validate()?;
    ensure_exists(state.lookup.as_ref(), RemoteCollection::Turmas, reserva.turma_id).await?;

    let reserva = ReservaService::create(&state.db, reserva).await?;

    Ok((StatusCode::CREATED, Json(reserva.into())))
}

/// List all reservations
///
/// Stored class ids are returned as they are; they are not checked again.
#[utoipa::path(
    get,
    path = "/reservas",
    responses(
        (status = 200, description = "All reservations in creation order", body = Vec<ReservaResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn list_reservas(
    State(state): State<DependentState>,
) -> Result<Json<Vec<ReservaResponse>>, AppError> {
    let reservas = ReservaService::list(&state.db).await?;

    Ok(Json(reservas.into_iter().map(Into::into).collect()))
}

/// Update the supplied fields of a reservation
///
/// A new `turma_id` is checked against the management service; an omitted one
/// keeps its stored value without a check.
#[utoipa::path(
    put,
    path = "/reservas/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservaRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ReservaUpdated),
        (status = 404, description = "Reservation or class not found", body = ErrorResponse),
        (status = 500, description = "Management service could not be reached", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn update_reserva(
    State(state): State<DependentState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<UpdateReservaRequest>,
) -> Result<Json<ReservaUpdated>, AppError> {
    let changes = body.validate()?;

    // Unknown reservations are reported before management is contacted
    ReservaService::get(&state.db, id).await?;

    if let Some(turma_id) = changes.turma_id {
        ensure_exists(state.lookup.as_ref(), RemoteCollection::Turmas, turma_id).await?;
    }

    let reserva = ReservaService::update(&state.db, id, changes).await?;

    Ok(Json(ReservaUpdated {
        message: "Reserva atualizada com sucesso".to_string(),
        reserva: reserva.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/reservas/{id}",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn delete_reserva(
    State(state): State<DependentState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    ReservaService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Reserva deletada")))
}
