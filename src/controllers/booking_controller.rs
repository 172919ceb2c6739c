use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, DocumentUpload};
use crate::dto::common::ApiResponse;
use crate::models::booking::{Booking, DocumentKind, DocumentMeta};
use crate::services::catalog;
use crate::state::AppState;
use crate::utils::errors::{
    bad_request_error, conflict_error, internal_error, not_found_error, validation_error, AppError,
};
use crate::utils::validation::validate_positive;

/// Importe mínimo de reserva
const MIN_BOOKING_AMOUNT: f64 = 500.0;

/// Tamaño máximo de documento adjunto: 4 MB
const MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;

/// Tipos de documento aceptados
const ALLOWED_DOCUMENT_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

pub struct BookingController {
    state: AppState,
}

impl BookingController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        // Validaciones declarativas del DTO (nombre, móvil, email, dirección)
        request.validate()?;

        if request.customer_name.trim().is_empty() {
            return Err(validation_error("customer_name", "El nombre del cliente es requerido"));
        }

        if validate_positive(request.booking_amount).is_err() {
            return Err(validation_error("booking_amount", "El importe de reserva debe ser positivo"));
        }
        if request.booking_amount < MIN_BOOKING_AMOUNT {
            return Err(bad_request_error("El importe mínimo de reserva es 500"));
        }

        // Validar modelo y variante contra el catálogo
        if catalog::find(&request.bike_model).is_none() {
            return Err(validation_error("bike_model", "Modelo no disponible para reserva"));
        }
        if !catalog::is_valid_selection(&request.bike_model, &request.variant) {
            return Err(validation_error("variant", "Variante no disponible para este modelo"));
        }

        // Rechazar reservas repetidas del mismo móvil para el mismo modelo
        if self
            .state
            .has_booking_for(&request.mobile_number, &request.bike_model)
            .await
        {
            return Err(conflict_error("Booking", "mobile_number", &request.mobile_number));
        }

        // Validar los documentos sin conservar su contenido
        let mut documents = Vec::new();
        if let Some(upload) = &request.aadhar {
            documents.push(validate_document(DocumentKind::Aadhar, upload)?);
        }
        if let Some(upload) = &request.pan {
            documents.push(validate_document(DocumentKind::Pan, upload)?);
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            reference: generate_reference(),
            customer_name: request.customer_name,
            mobile_number: request.mobile_number,
            alternate_mobile_number: request.alternate_mobile_number,
            email: request.email,
            address: request.address,
            bike_model: request.bike_model,
            variant: request.variant,
            booking_amount: Decimal::from_f64(request.booking_amount)
                .ok_or_else(|| internal_error("El importe de la reserva no es representable"))?,
            documents,
            created_at: Utc::now(),
        };

        log::info!(
            "📝 Reserva {} registrada para {} ({} {})",
            booking.reference,
            booking.customer_name,
            booking.bike_model,
            booking.variant
        );

        let response = BookingResponse::from(booking.clone());
        self.state.store_booking(booking).await;

        Ok(ApiResponse::success_with_message(
            response,
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .state
            .get_booking(&id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        Ok(BookingResponse::from(booking))
    }

    pub async fn list(&self) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.state.list_bookings().await;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn cancel(&self, id: Uuid) -> Result<(), AppError> {
        let booking = self
            .state
            .remove_booking(&id)
            .await
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        log::info!("🗑️ Reserva {} cancelada", booking.reference);
        Ok(())
    }
}

/// Generar un código corto de referencia legible para la reserva
fn generate_reference() -> String {
    // Sin 0/O/1/I/L para que se pueda dictar por teléfono
    const ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
    let mut rng = rand::thread_rng();
    let code: String = (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("SM-{}", code)
}

/// Validar un documento adjunto y quedarse solo con sus metadatos
fn validate_document(
    kind: DocumentKind,
    upload: &DocumentUpload,
) -> Result<DocumentMeta, AppError> {
    if !ALLOWED_DOCUMENT_TYPES.contains(&upload.content_type.as_str()) {
        return Err(bad_request_error("Solo se aceptan documentos PDF / JPG / PNG"));
    }

    let bytes = BASE64
        .decode(upload.data.as_bytes())
        .map_err(|_| bad_request_error("El documento no es base64 válido"))?;

    if bytes.len() >= MAX_DOCUMENT_BYTES {
        return Err(bad_request_error("El documento debe ocupar menos de 4MB"));
    }

    Ok(DocumentMeta {
        kind,
        file_name: upload.file_name.clone(),
        content_type: upload.content_type.clone(),
        size_bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, data: &str) -> DocumentUpload {
        DocumentUpload {
            file_name: "doc.pdf".to_string(),
            content_type: content_type.to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_generate_reference_shape() {
        let reference = generate_reference();
        assert!(reference.starts_with("SM-"));
        assert_eq!(reference.len(), 9);
    }

    #[test]
    fn test_validate_document_accepts_small_pdf() {
        let encoded = BASE64.encode(b"%PDF-1.4 contenido");
        let meta = validate_document(DocumentKind::Pan, &upload("application/pdf", &encoded)).unwrap();
        assert_eq!(meta.kind, DocumentKind::Pan);
        assert_eq!(meta.size_bytes, 18);
    }

    #[test]
    fn test_validate_document_rejects_wrong_type() {
        let encoded = BASE64.encode(b"GIF89a");
        let result = validate_document(DocumentKind::Aadhar, &upload("image/gif", &encoded));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_document_rejects_bad_base64() {
        let result = validate_document(DocumentKind::Aadhar, &upload("image/png", "no-es-base64!!!"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_document_rejects_oversized() {
        let encoded = BASE64.encode(vec![0u8; MAX_DOCUMENT_BYTES]);
        let result = validate_document(DocumentKind::Aadhar, &upload("image/jpeg", &encoded));
        assert!(result.is_err());
    }
}
