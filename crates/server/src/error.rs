use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use management_client::ReferenceError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::dtos::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    /// A local record does not exist
    #[error("{0}")]
    NotFound(String),

    /// A referenced management record does not exist, or management could not be asked
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Missing or empty required field, or an unreadable body
    #[error("{0}")]
    BadRequest(String),

    #[error("Erro no banco de dados: {0}")]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(message) => Self::NotFound(message),
            other => Self::Database(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Reference(ReferenceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Reference(ReferenceError::Communication(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Database(err) = &self {
            error!("Database error: {err}");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use management_client::LookupError;
    use models::collection::RemoteCollection;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(DbErr::RecordNotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(ReferenceError::NotFound {
                collection: RemoteCollection::Professores,
                id: 1
            })
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ReferenceError::from(LookupError::Unreachable("refused".into())))
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::BadRequest("nome".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_reference_message_is_passed_through() {
        let err = AppError::from(ReferenceError::NotFound {
            collection: RemoteCollection::Turmas,
            id: 99,
        });
        assert_eq!(err.to_string(), "Turma com ID 99 não encontrada");
    }
}
