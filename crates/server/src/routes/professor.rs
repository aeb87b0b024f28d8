use axum::{Json, extract::State, http::StatusCode};
use database::services::professor::ProfessorService;

use crate::{
    dtos::{
        ErrorResponse, MessageResponse,
        professor::{
            CreateProfessorRequest, ProfessorCreated, ProfessorResponse, UpdateProfessorRequest,
        },
    },
    error::AppError,
    state::ManagementState,
    utils::{json::AppJson, path::AppPath},
};

/// Create a professor
#[utoipa::path(
    post,
    path = "/professores",
    request_body = CreateProfessorRequest,
    responses(
        (status = 201, description = "Professor created", body = ProfessorCreated),
        (status = 400, description = "Missing or empty nome", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Professores"
)]
pub async fn create_professor(
    State(state): State<ManagementState>,
    AppJson(body): AppJson<CreateProfessorRequest>,
) -> Result<(StatusCode, Json<ProfessorCreated>), AppError> {
    let professor = ProfessorService::create(&state.db, body.validate()?).await?;

    Ok((StatusCode::CREATED, Json(professor.into())))
}

/// List all professors
#[utoipa::path(
    get,
    path = "/professores",
    responses(
        (status = 200, description = "All professors in creation order", body = Vec<ProfessorResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Professores"
)]
pub async fn list_professores(
    State(state): State<ManagementState>,
) -> Result<Json<Vec<ProfessorResponse>>, AppError> {
    let professores = ProfessorService::list(&state.db).await?;

    Ok(Json(professores.into_iter().map(Into::into).collect()))
}

/// Update the supplied fields of a professor
#[utoipa::path(
    put,
    path = "/professores/{id}",
    params(
        ("id" = i32, Path, description = "Professor ID")
    ),
    request_body = UpdateProfessorRequest,
    responses(
        (status = 200, description = "Professor updated", body = MessageResponse),
        (status = 400, description = "Empty nome", body = ErrorResponse),
        (status = 404, description = "Professor not found", body = ErrorResponse)
    ),
    tag = "Professores"
)]
pub async fn update_professor(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<UpdateProfessorRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    ProfessorService::update(&state.db, id, body.validate()?).await?;

    Ok(Json(MessageResponse::new("Professor atualizado")))
}

/// Delete a professor
#[utoipa::path(
    delete,
    path = "/professores/{id}",
    params(
        ("id" = i32, Path, description = "Professor ID")
    ),
    responses(
        (status = 200, description = "Professor deleted", body = MessageResponse),
        (status = 404, description = "Professor not found", body = ErrorResponse)
    ),
    tag = "Professores"
)]
pub async fn delete_professor(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    ProfessorService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Professor deletado")))
}
