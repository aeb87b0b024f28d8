use models::collection::RemoteCollection;
use thiserror::Error;

/// Failure to obtain a remote collection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The request could not be sent or no response arrived
    #[error("{0}")]
    Unreachable(String),

    /// The remote answered with a non-success status
    #[error("{0}")]
    Status(String),

    /// The response body was not a list of records
    #[error("{0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            Self::Status(err.to_string())
        } else if err.is_decode() {
            Self::MalformedBody(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

/// Outcome of a failed reference check
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    #[error("{}", .collection.not_found_message(.id))]
    NotFound { collection: RemoteCollection, id: i32 },

    #[error("Erro comunicação: {0}")]
    Communication(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_error_messages() {
        let err = ReferenceError::NotFound {
            collection: RemoteCollection::Turmas,
            id: 99,
        };
        assert_eq!(err.to_string(), "Turma com ID 99 não encontrada");

        let err = ReferenceError::from(LookupError::Unreachable("connection refused".into()));
        assert_eq!(err.to_string(), "Erro comunicação: connection refused");
    }
}
