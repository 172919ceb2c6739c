//! Catálogo de modelos reservables
//!
//! Lista estática de los modelos y variantes que acepta el formulario de
//! reserva. Las reservas se validan contra este catálogo.

use lazy_static::lazy_static;

/// Variantes disponibles (compartidas por todos los modelos del catálogo)
const VARIANTS: &[&str] = &["Standard", "Deluxe", "Disc Brake", "Electric Start"];

/// Modelo de moto reservable
#[derive(Debug, Clone)]
pub struct BikeModel {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

lazy_static! {
    pub static ref CATALOG: Vec<BikeModel> = vec![
        BikeModel { name: "Hero Splendor", variants: VARIANTS },
        BikeModel { name: "Honda Shine", variants: VARIANTS },
        BikeModel { name: "TVS Apache", variants: VARIANTS },
        BikeModel { name: "Yamaha FZ", variants: VARIANTS },
    ];
}

/// Todos los modelos del catálogo
pub fn all() -> &'static [BikeModel] {
    &CATALOG
}

/// Buscar un modelo por nombre exacto
pub fn find(name: &str) -> Option<&'static BikeModel> {
    CATALOG.iter().find(|m| m.name == name)
}

/// Verificar que la combinación modelo + variante existe en el catálogo
pub fn is_valid_selection(model: &str, variant: &str) -> bool {
    find(model).map_or(false, |m| m.variants.contains(&variant))
}
