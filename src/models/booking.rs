//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking tal como se guarda en el estado
//! en memoria. De los documentos adjuntos solo se conservan los metadatos:
//! el contenido se valida y se descarta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserva de una moto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub reference: String,
    pub customer_name: String,
    pub mobile_number: String,
    pub alternate_mobile_number: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub bike_model: String,
    pub variant: String,
    pub booking_amount: Decimal,
    pub documents: Vec<DocumentMeta>,
    pub created_at: DateTime<Utc>,
}

/// Tipo de documento de identidad adjunto a la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Aadhar,
    Pan,
}

/// Metadatos de un documento adjunto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub kind: DocumentKind,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
}
