use std::fmt::{Display, Formatter, Result as FmtResult};

use strum::AsRefStr;

/// Collections owned by the management service that other services may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RemoteCollection {
    /// Classes, exposed at `/turmas`
    Turmas,
    /// Professors, exposed at `/professores`
    Professores,
}

impl RemoteCollection {
    /// Path segment of the collection's list endpoint
    pub fn as_path(&self) -> &str {
        self.as_ref()
    }

    /// Human readable message for a reference that does not resolve
    pub fn not_found_message(&self, id: impl Display) -> String {
        match self {
            Self::Turmas => format!("Turma com ID {id} não encontrada"),
            Self::Professores => format!("Professor com ID {id} não encontrado"),
        }
    }
}

impl Display for RemoteCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Turmas => write!(f, "Turma"),
            Self::Professores => write!(f, "Professor"),
        }
    }
}
