use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    pub email: String,
    pub nome: Option<String>,
    pub escola: Option<String>,
}

pub struct DBSignup {
    pub email: String,
    pub nome: Option<String>,
    pub escola: Option<String>,
    pub token_hash: String,
}

#[derive(Serialize, Deserialize)]
pub struct SignupRes {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegenerateRes {
    pub token: String,
}
