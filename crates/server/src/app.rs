use axum::{
    Router,
    routing::{delete, get, put},
};
use database::db;
use log::info;
use management_client::HttpLookup;
use migration::{ActivityMigrator, ManagementMigrator, MigratorTrait, ReservationMigrator};
use sea_orm::DbErr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{Config, ConfigError, Service},
    doc::{ActivityApiDoc, ManagementApiDoc, ReservationApiDoc},
    routes::{aluno, atividade, health, professor, reserva, turma},
    state::{DependentState, ManagementState},
    utils::shutdown::shutdown_signal,
};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

fn docs(api: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", api)
}

pub fn management_router(state: ManagementState) -> Router {
    Router::new()
        .route(
            "/professores",
            get(professor::list_professores).post(professor::create_professor),
        )
        .route(
            "/professores/{id}",
            put(professor::update_professor).delete(professor::delete_professor),
        )
        .route("/turmas", get(turma::list_turmas).post(turma::create_turma))
        .route(
            "/turmas/{id}",
            put(turma::update_turma).delete(turma::delete_turma),
        )
        .route("/alunos", get(aluno::list_alunos).post(aluno::create_aluno))
        .route(
            "/alunos/{id}",
            put(aluno::update_aluno).delete(aluno::delete_aluno),
        )
        .route("/health", get(health::health))
        .merge(docs(ManagementApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

pub fn reservation_router(state: DependentState) -> Router {
    Router::new()
        .route(
            "/reservas",
            get(reserva::list_reservas).post(reserva::create_reserva),
        )
        .route(
            "/reservas/{id}",
            put(reserva::update_reserva).delete(reserva::delete_reserva),
        )
        .route("/health", get(health::health))
        .merge(docs(ReservationApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

pub fn activity_router(state: DependentState) -> Router {
    Router::new()
        .route(
            "/atividades",
            get(atividade::list_atividades).post(atividade::create_atividade),
        )
        .route("/atividades/{id}", delete(atividade::delete_atividade))
        .route("/health", get(health::health))
        .merge(docs(ActivityApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

/// Starts `service` with configuration from the environment and serves until shutdown
pub async fn run(service: Service) -> Result<(), StartupError> {
    let config = Config::load(service)?;
    info!("Starting {service} service");

    let app = match service {
        Service::Management => {
            let db = db::init::<ManagementMigrator>(&config.database_url).await?;
            management_router(ManagementState::new(db))
        }
        Service::Reservations => {
            let state = dependent_state::<ReservationMigrator>(&config).await?;
            reservation_router(state)
        }
        Service::Activities => {
            let state = dependent_state::<ActivityMigrator>(&config).await?;
            activity_router(state)
        }
    };

    serve(app, config.port).await?;
    info!("{service} service stopped");

    Ok(())
}

async fn dependent_state<M: MigratorTrait>(config: &Config) -> Result<DependentState, DbErr> {
    let db = db::init::<M>(&config.database_url).await?;

    info!("Checking references against {}", config.management_url);

    let lookup = HttpLookup::new(config.management_url.as_str());
    Ok(DependentState::new(db, lookup))
}

/// Binds `0.0.0.0:port` and serves `app` with graceful shutdown
pub async fn serve(app: Router, port: u16) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Running axum on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::send;
    use axum::http::{Method, StatusCode};
    use database::db::create_connection;
    use serde_json::json;

    /// Runs a real management service on an ephemeral port, returning its base url
    async fn spawn_management() -> String {
        let db = create_connection("sqlite::memory:").await.unwrap();
        ManagementMigrator::up(&db, None).await.unwrap();
        let app = management_router(ManagementState::new(db));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn activities_against(management_url: &str) -> Router {
        let db = create_connection("sqlite::memory:").await.unwrap();
        ActivityMigrator::up(&db, None).await.unwrap();
        activity_router(DependentState::new(db, HttpLookup::new(management_url)))
    }

    async fn reservations_against(management_url: &str) -> Router {
        let db = create_connection("sqlite::memory:").await.unwrap();
        ReservationMigrator::up(&db, None).await.unwrap();
        reservation_router(DependentState::new(db, HttpLookup::new(management_url)))
    }

    /// POSTs `body` to the management service and returns the new id
    async fn create_remote(base_url: &str, path: &str, body: serde_json::Value) -> i64 {
        let created: serde_json::Value = reqwest::Client::new()
            .post(format!("{base_url}{path}"))
            .json(&body)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        created["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_reservation_against_live_management() {
        let management = spawn_management().await;
        let turma_id = create_remote(
            &management,
            "/turmas",
            json!({"descricao": "Turma A", "professor_id": 1}),
        )
        .await;
        let reservas = reservations_against(&management).await;

        let (status, body) = send(
            &reservas,
            Method::POST,
            "/reservas",
            Some(json!({"data": "2024-01-01", "sala": 3, "lab": false, "turma_id": turma_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["sala"], 3);

        let (status, body) = send(
            &reservas,
            Method::POST,
            "/reservas",
            Some(json!({"data": "2024-01-01", "sala": 3, "turma_id": turma_id + 98})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            format!("Turma com ID {} não encontrada", turma_id + 98)
        );
    }

    #[tokio::test]
    async fn test_activity_with_management_unreachable() {
        // Nothing listens on a port that was just released
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let atividades = activities_against(&format!("http://{addr}")).await;
        let (status, body) = send(
            &atividades,
            Method::POST,
            "/atividades",
            Some(json!({"descricao": "Prova", "nota": 7.0, "turma_id": 1, "professor_id": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Erro comunicação: ")
        );

        let (_, listed) = send(&atividades, Method::GET, "/atividades", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_stale_professor_reference_is_kept() {
        let management = spawn_management().await;
        let professor_id = create_remote(&management, "/professores", json!({"nome": "Ana"})).await;
        let turma_id = create_remote(
            &management,
            "/turmas",
            json!({"descricao": "Turma A", "professor_id": professor_id}),
        )
        .await;
        let atividades = activities_against(&management).await;

        let (status, created) = send(
            &atividades,
            Method::POST,
            "/atividades",
            Some(json!({
                "descricao": "Prova 1",
                "nota": 9.0,
                "turma_id": turma_id,
                "professor_id": professor_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let deleted = reqwest::Client::new()
            .delete(format!("{management}/professores/{professor_id}"))
            .send()
            .await
            .unwrap();
        assert!(deleted.status().is_success());

        let (status, listed) = send(&atividades, Method::GET, "/atividades", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], created["id"]);
        assert_eq!(listed[0]["professor_id"], professor_id);

        // A new write with the deleted professor is refused
        let (status, body) = send(
            &atividades,
            Method::POST,
            "/atividades",
            Some(json!({
                "descricao": "Prova 2",
                "turma_id": turma_id,
                "professor_id": professor_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            format!("Professor com ID {professor_id} não encontrado")
        );
    }

    #[tokio::test]
    async fn test_health() {
        let management = crate::test_util::management_app().await;

        let (status, body) = send(&management, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("OK"));
    }
}
