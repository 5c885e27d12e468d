pub mod atividade;
pub mod identity;
pub mod profile;
pub mod turma;

/*
 Ownership chain: identity -> profile -> turma -> atividade.
 An identity is the credential record a teacher signs in with. Its profile
 is provisioned in the same transaction, so there is never an identity
 without a profile. Turmas hang off the profile and atividades hang off a
 turma; deletes cascade downward through the chain.
 */
