use serde::{Deserialize, Serialize};

// Request de registro
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Response de los endpoints de autenticación
#[derive(Debug, Serialize)]
pub struct AuthUserResponse {
    pub name: Option<String>,
    pub email: String,
}
