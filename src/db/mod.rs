pub mod atividade;
pub mod identity;
pub mod perfil;
pub mod postgres_service;
pub mod turma;
