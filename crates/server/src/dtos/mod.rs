pub mod aluno;
pub mod atividade;
pub mod professor;
pub mod reserva;
pub mod turma;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rejects a missing field
fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("O campo '{field}' é obrigatório")))
}

/// Rejects a missing or blank text field
fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    let text = required(value, field)?;
    if text.trim().is_empty() {
        return Err(blank(field));
    }

    Ok(text)
}

/// Rejects a text field that is present but blank
fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        Some(text) if text.trim().is_empty() => Err(blank(field)),
        other => Ok(other),
    }
}

/// Tells an explicit `null` (`Some(None)`) apart from a missing field (`None`)
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Rejects an explicit `null` for a column that cannot be cleared
fn not_null<T>(value: Option<Option<T>>, field: &str) -> Result<Option<T>, AppError> {
    match value {
        Some(None) => Err(AppError::BadRequest(format!(
            "O campo '{field}' não pode ser nulo"
        ))),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

fn blank(field: &str) -> AppError {
    AppError::BadRequest(format!("O campo '{field}' não pode ser vazio"))
}
