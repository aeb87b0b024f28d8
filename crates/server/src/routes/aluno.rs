use axum::{Json, extract::State, http::StatusCode};
use database::services::aluno::AlunoService;

use crate::{
    dtos::{
        ErrorResponse, MessageResponse,
        aluno::{AlunoCreated, AlunoResponse, CreateAlunoRequest, UpdateAlunoRequest},
    },
    error::AppError,
    state::ManagementState,
    utils::{json::AppJson, path::AppPath},
};

#[utoipa::path(
    post,
    path = "/alunos",
    request_body = CreateAlunoRequest,
    responses(
        (status = 201, description = "Student created", body = AlunoCreated),
        (status = 400, description = "Missing or empty nome", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Alunos"
)]
pub async fn create_aluno(
    State(state): State<ManagementState>,
    AppJson(body): AppJson<CreateAlunoRequest>,
) -> Result<(StatusCode, Json<AlunoCreated>), AppError> {
    let aluno = AlunoService::create(&state.db, body.validate()?).await?;

    Ok((StatusCode::CREATED, Json(aluno.into())))
}

#[utoipa::path(
    get,
    path = "/alunos",
    responses(
        (status = 200, description = "All students in creation order", body = Vec<AlunoResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Alunos"
)]
pub async fn list_alunos(
    State(state): State<ManagementState>,
) -> Result<Json<Vec<AlunoResponse>>, AppError> {
    let alunos = AlunoService::list(&state.db).await?;

    Ok(Json(alunos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    put,
    path = "/alunos/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateAlunoRequest,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Empty nome", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Alunos"
)]
pub async fn update_aluno(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<UpdateAlunoRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AlunoService::update(&state.db, id, body.validate()?).await?;

    Ok(Json(MessageResponse::new("Aluno atualizado com sucesso")))
}

#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Alunos"
)]
pub async fn delete_aluno(
    State(state): State<ManagementState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    AlunoService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Aluno deletado com sucesso")))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{management_app, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_nonexistent_is_not_found() {
        let app = management_app().await;

        let (status, body) = send(&app, Method::DELETE, "/alunos/404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Aluno com ID 404 não encontrado"}));
    }

    #[tokio::test]
    async fn test_non_numeric_id_gets_error_body() {
        let app = management_app().await;

        let (status, body) = send(&app, Method::DELETE, "/alunos/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("abc")));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/alunos/99999999999",
            Some(json!({"nome": "Bruno"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_null_detaches_student_from_class() {
        let app = management_app().await;

        let (_, created) = send(
            &app,
            Method::POST,
            "/alunos",
            Some(json!({"nome": "Carla", "turma_id": 2})),
        )
        .await;
        let uri = format!("/alunos/{}", created["id"]);

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"turma_id": null}))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, listed) = send(&app, Method::GET, "/alunos", None).await;
        assert_eq!(listed[0]["turma_id"], json!(null));
        assert_eq!(listed[0]["nome"], "Carla");
    }

    #[tokio::test]
    async fn test_student_lifecycle() {
        let app = management_app().await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/alunos",
            Some(json!({
                "nome": "Bruno",
                "idade": 15,
                "turma_id": 2,
                "data_nascimento": "2010-03-14"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/alunos/{}", created["id"]);

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"turma_id": 3}))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, listed) = send(&app, Method::GET, "/alunos", None).await;
        assert_eq!(
            listed,
            json!([{
                "id": created["id"],
                "nome": "Bruno",
                "idade": 15,
                "turma_id": 3,
                "data_nascimento": "2010-03-14"
            }])
        );

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Aluno deletado com sucesso");

        let (_, listed) = send(&app, Method::GET, "/alunos", None).await;
        assert_eq!(listed, json!([]));
    }
}
