use axum::{Json, extract::State, http::StatusCode};
use database::services::turma::TurmaService;

use crate::{
    dtos::{
        ErrorResponse, MessageResponse,
        turma::{CreateTurmaRequest, TurmaCreated, TurmaResponse, UpdateTurmaRequest},
    },
    error::AppError,
    state::ManagementState,
    utils::{json::AppJson, path::AppPath},
};

/// Create a class
///
/// `professor_id` is stored as given; it is not checked against the professors table.
#[utoipa::path(
    post,
    path = "/turmas",
    request_body = CreateTurmaRequest,
    responses(
        (status = 201, description = "Class created", body = TurmaCreated),
        (status = 400, description = "Missing descricao or professor_id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Turmas"
)]
pub async fn create_turma(
    State(state): State<ManagementState>,
    AppJson(body): AppJson<CreateTurmaRequest>,
) -> Result<(StatusCode, Json<TurmaCreated>), AppError> {
    let turma = TurmaService::create(&state.db, body.validate()?).await?;

    Ok((StatusCode::CREATED, Json(turma.into())))
}

/// List all classes
///
/// Other services fetch this list to check class references.
#[utoipa::path(
    get,
    path = "/turmas",
    responses(
        (status = 200, description = "All classes in creation order", body = Vec<TurmaResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Turmas"
)]
pub async fn list_turmas(
    State(state): State<ManagementState>,
) -> Result<Json<Vec<TurmaResponse>>, AppError> {
    let turmas = TurmaService::list(&state.db).await?;

    Ok(Json(turmas.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/turmas/{id}",
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateTurmaRequest,
    responses(
        (status = 200, description = "Class updated", body = MessageResponse),
        (status = 400, description = "Empty descricao", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Turmas"
)]
pub async fn update_turma(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<UpdateTurmaRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    TurmaService::update(&state.db, id, body.validate()?).await?;

    Ok(Json(MessageResponse::new("Turma atualizada")))
}

#[utoipa::path(
    delete,
    path = "/turmas/{id}",
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class deleted", body = MessageResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Turmas"
)]
pub async fn delete_turma(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    TurmaService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Turma deletada")))
}
