use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RPerfilUpdate {
    pub nome: Option<String>,
    pub escola: Option<String>,
}
