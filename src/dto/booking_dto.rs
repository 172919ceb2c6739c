use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, DocumentMeta};

// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,

    #[validate(custom = "crate::utils::validation::validate_indian_mobile")]
    pub mobile_number: String,

    #[validate(custom = "crate::utils::validation::validate_indian_mobile")]
    pub alternate_mobile_number: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub address: String,

    pub bike_model: String,
    pub variant: String,

    pub booking_amount: f64,

    pub aadhar: Option<DocumentUpload>,
    pub pan: Option<DocumentUpload>,
}

// Documento adjunto codificado en base64
#[derive(Debug, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub reference: String,
    pub customer_name: String,
    pub mobile_number: String,
    pub alternate_mobile_number: Option<String>,
    pub email: Option<String>,
    pub address: String,
    pub bike_model: String,
    pub variant: String,
    pub booking_amount: String,
    pub documents: Vec<DocumentMeta>,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            reference: booking.reference,
            customer_name: booking.customer_name,
            mobile_number: booking.mobile_number,
            alternate_mobile_number: booking.alternate_mobile_number,
            email: booking.email,
            address: booking.address,
            bike_model: booking.bike_model,
            variant: booking.variant,
            booking_amount: booking.booking_amount.to_string(),
            documents: booking.documents,
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}
