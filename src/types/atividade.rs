use chrono::NaiveDate;
use entity::atividade::{Status, Tipo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RAtividadeCreate {
    pub turma_id: Uuid,
    pub titulo: String,
    pub descricao: Option<String>,
    pub data_entrega: Option<NaiveDate>,
    pub tipo: Option<Tipo>,
    pub status: Option<Status>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RAtividadeUpdate {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data_entrega: Option<NaiveDate>,
    pub tipo: Option<Tipo>,
    pub status: Option<Status>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AtividadeQuery {
    pub turma: Option<Uuid>,
}
