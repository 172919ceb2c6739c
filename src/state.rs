//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Las reservas viven solo en memoria: el
//! sitio no tiene persistencia de backend y un reinicio las descarta.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::booking::Booking;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Almacenar una reserva nueva
    pub async fn store_booking(&self, booking: Booking) {
        let mut bookings = self.bookings.write().await;

        let old_count = bookings.len();
        bookings.insert(booking.id, booking);
        let new_count = bookings.len();

        log::info!("💾 Reserva almacenada. Reservas antes: {}, después: {}", old_count, new_count);
    }

    /// Obtener una reserva por id
    pub async fn get_booking(&self, id: &Uuid) -> Option<Booking> {
        let bookings = self.bookings.read().await;
        bookings.get(id).cloned()
    }

    /// Listar todas las reservas ordenadas por fecha de creación
    pub async fn list_bookings(&self) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        let mut all: Vec<Booking> = bookings.values().cloned().collect();
        all.sort_by_key(|b| b.created_at);
        all
    }

    /// Eliminar una reserva, devolviéndola si existía
    pub async fn remove_booking(&self, id: &Uuid) -> Option<Booking> {
        let mut bookings = self.bookings.write().await;
        bookings.remove(id)
    }

    /// Verificar si ya existe una reserva para el mismo móvil y modelo
    pub async fn has_booking_for(&self, mobile_number: &str, bike_model: &str) -> bool {
        let bookings = self.bookings.read().await;
        bookings
            .values()
            .any(|b| b.mobile_number == mobile_number && b.bike_model == bike_model)
    }
}
