use entity::turma::Periodo;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RTurmaCreate {
    pub nome: String,
    pub ano_letivo: String,
    pub periodo: Option<Periodo>,
    pub descricao: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTurmaUpdate {
    pub nome: Option<String>,
    pub ano_letivo: Option<String>,
    pub periodo: Option<Periodo>,
    pub descricao: Option<String>,
}
