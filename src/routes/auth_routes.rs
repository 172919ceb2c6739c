use axum::{routing::post, Json, Router};

use crate::dto::auth_dto::{AuthUserResponse, LoginRequest, RegisterRequest};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_email, validate_length, validate_not_empty};

// Los formularios de login/registro del sitio no verifican credenciales:
// solo necesitan una respuesta de éxito tras validar la forma de los campos.
// TODO: conectar con un proveedor de identidad real cuando exista el backend de usuarios

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthUserResponse>>, AppError> {
    if validate_not_empty(&request.name).is_err() {
        return Err(validation_error("name", "El nombre es requerido"));
    }
    if validate_email(&request.email).is_err() {
        return Err(validation_error("email", "Email inválido"));
    }
    if validate_length(&request.password, 6, 128).is_err() {
        return Err(validation_error("password", "La contraseña debe tener entre 6 y 128 caracteres"));
    }

    log::info!("👤 Registro recibido para {}", request.email);

    Ok(Json(ApiResponse::success_with_message(
        AuthUserResponse {
            name: Some(request.name),
            email: request.email,
        },
        "Registro exitoso".to_string(),
    )))
}

async fn login(
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthUserResponse>>, AppError> {
    if validate_email(&request.email).is_err() {
        return Err(validation_error("email", "Email inválido"));
    }
    if validate_not_empty(&request.password).is_err() {
        return Err(validation_error("password", "La contraseña es requerida"));
    }

    log::info!("🔓 Login recibido para {}", request.email);

    Ok(Json(ApiResponse::success_with_message(
        AuthUserResponse {
            name: None,
            email: request.email,
        },
        "Login exitoso".to_string(),
    )))
}
