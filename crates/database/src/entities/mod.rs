pub mod aluno;
pub mod atividade;
pub mod professor;
pub mod reserva;
pub mod turma;

pub use aluno as alunos;
pub use atividade as atividades;
pub use professor as professores;
pub use reserva as reservas;
pub use turma as turmas;
