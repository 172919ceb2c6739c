//! Backend de captación de leads del concesionario Shantha Motors
//!
//! Este crate expone la API JSON que consume el sitio del concesionario:
//! calculadora de cuotas (interés plano), reservas de motos, directorio de
//! sucursales, catálogo de modelos y los endpoints stub de autenticación.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    // En producción solo se aceptan los orígenes configurados
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/loan", routes::loan_routes::create_loan_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/showroom", routes::showroom_routes::create_showroom_router())
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Backend del concesionario funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
