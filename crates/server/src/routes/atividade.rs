use axum::{Json, extract::State, http::StatusCode};
use database::services::atividade::AtividadeService;
use management_client::ensure_exists;
use models::collection::RemoteCollection;

use crate::{
    dtos::{
        ErrorResponse, MessageResponse,
        atividade::{AtividadeCreated, AtividadeResponse, CreateAtividadeRequest},
    },
    error::AppError,
    state::DependentState,
    utils::{json::AppJson, path::AppPath},
};

/// Create a graded activity
///
/// The class is checked first, then the professor. The first reference that
/// fails ends the request, so the professor list is never fetched for an
/// unknown class.
#[utoipa::path(
    post,
    path = "/atividades",
    request_body = CreateAtividadeRequest,
    responses(
        (status = 201, description = "Activity created", body = AtividadeCreated),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Class or professor not found in the management service", body = ErrorResponse),
        (status = 500, description = "Management service could not be reached", body = ErrorResponse)
    ),
    tag = "Atividades"
)]
pub async fn create_atividade(
    State(state): State<DependentState>,
    AppJson(body): AppJson<CreateAtividadeRequest>,
) -> Result<(StatusCode, Json<AtividadeCreated>), AppError> {
    let atividade = body.validate()?;

    let lookup = state.lookup.as_ref();
    ensure_exists(lookup, RemoteCollection::Turmas, atividade.turma_id).await?;
    ensure_exists(lookup, RemoteCollection::Professores, atividade.professor_id).await?;

    let atividade = AtividadeService::create(&state.db, atividade).await?;

    Ok((StatusCode::CREATED, Json(atividade.into())))
}

#[utoipa::path(
    get,
    path = "/atividades",
    responses(
        (status = 200, description = "All activities in creation order", body = Vec<AtividadeResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Atividades"
)]
pub async fn list_atividades(
    State(state): State<DependentState>,
) -> Result<Json<Vec<AtividadeResponse>>, AppError> {
    let atividades = AtividadeService::list(&state.db).await?;

    Ok(Json(atividades.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    delete,
    path = "/atividades/{id}",
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Activity deleted", body = MessageResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse)
    ),
    tag = "Atividades"
)]
pub async fn delete_atividade(
    State(state): State<DependentState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    AtividadeService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Atividade deletada")))
}
