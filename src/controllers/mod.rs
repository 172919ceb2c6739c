//! Controllers de la aplicación
//!
//! Reglas de negocio por recurso; los handlers de routes/ delegan aquí.

pub mod booking_controller;
