pub mod atividade;
pub mod auth;
pub mod error;
pub mod perfil;
pub mod response;
pub mod turma;
