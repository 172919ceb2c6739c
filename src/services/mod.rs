//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el cálculo
//! de cuotas con interés plano, el directorio de sucursales y el catálogo
//! de modelos reservables.

pub mod catalog;
pub mod loan_estimator;
pub mod showroom_directory;

pub use loan_estimator::*;
