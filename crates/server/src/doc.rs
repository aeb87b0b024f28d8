use crate::routes::{aluno, atividade, health, professor, reserva, turma};
use utoipa::OpenApi;

/// API documentation of the management service
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        professor::create_professor,
        professor::list_professores,
        professor::update_professor,
        professor::delete_professor,
        turma::create_turma,
        turma::list_turmas,
        turma::update_turma,
        turma::delete_turma,
        aluno::create_aluno,
        aluno::list_alunos,
        aluno::update_aluno,
        aluno::delete_aluno
    ),
    tags(
        (name = "Professores", description = "Professor records"),
        (name = "Turmas", description = "Class records, referenced by reservations and activities"),
        (name = "Alunos", description = "Student records"),
    ),
    info(
        title = "Management API",
        version = "1.0.0",
        description = "Professors, classes and students",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ManagementApiDoc;

/// API documentation of the reservation service
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        reserva::create_reserva,
        reserva::list_reservas,
        reserva::update_reserva,
        reserva::delete_reserva
    ),
    tags(
        (name = "Reservas", description = "Room reservations for management classes"),
    ),
    info(
        title = "Reservations API",
        version = "1.0.0",
        description = "Room reservations",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ReservationApiDoc;

/// API documentation of the activity service
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        atividade::create_atividade,
        atividade::list_atividades,
        atividade::delete_atividade
    ),
    tags(
        (name = "Atividades", description = "Graded activities"),
    ),
    info(
        title = "Activities API",
        version = "1.0.0",
        description = "Graded activities",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ActivityApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_paths() {
        let management = ManagementApiDoc::openapi();
        for path in ["/professores", "/professores/{id}", "/turmas", "/alunos/{id}"] {
            assert!(management.paths.paths.contains_key(path), "missing {path}");
        }

        let activities = ActivityApiDoc::openapi();
        assert!(activities.paths.paths.contains_key("/atividades/{id}"));
        assert!(!activities.paths.paths.contains_key("/reservas"));
    }
}
