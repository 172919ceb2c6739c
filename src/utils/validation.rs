//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de los formularios del sitio.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    // Móvil indio: 10 dígitos, empieza por 6-9
    static ref INDIAN_MOBILE_RE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
}

/// Validar un número de móvil indio de 10 dígitos
pub fn validate_indian_mobile(value: &str) -> Result<(), ValidationError> {
    if !INDIAN_MOBILE_RE.is_match(value) {
        let mut error = ValidationError::new("indian_mobile");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"10 digits starting with 6-9".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_indian_mobile() {
        assert!(validate_indian_mobile("9538968888").is_ok());
        assert!(validate_indian_mobile("6123456789").is_ok());
        // No empieza por 6-9
        assert!(validate_indian_mobile("5123456789").is_err());
        // Longitud incorrecta
        assert!(validate_indian_mobile("953896888").is_err());
        assert!(validate_indian_mobile("95389688881").is_err());
        // Caracteres no numéricos
        assert!(validate_indian_mobile("95389x8888").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Rahul Sharma").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(500.0).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }
}
