pub mod aluno;
pub mod atividade;
pub mod health;
pub mod professor;
pub mod reserva;
pub mod turma;
