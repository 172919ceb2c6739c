//! Directorio de sucursales del concesionario
//!
//! Datos estáticos de las sucursales publicadas en la página de contacto y
//! derivación de los enlaces de contacto (llamada, WhatsApp y mapas).

use lazy_static::lazy_static;

/// Sucursal del concesionario
#[derive(Debug, Clone)]
pub struct Showroom {
    pub name: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub map_url: &'static str,
    pub is_primary: bool,
    pub opening_hours: &'static str,
}

lazy_static! {
    /// Sucursales publicadas. Mismo horario en todas mientras no haya panel de administración.
    pub static ref SHOWROOMS: Vec<Showroom> = vec![
        Showroom {
            name: "Shantha Motors – Main Branch",
            phone: "9538968888",
            address: "123, Sample Road, Rajajinagar, Bengaluru, Karnataka 560010",
            map_url: "https://share.google/wmssab0m2Q9XasnpM",
            is_primary: true,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 2",
            phone: "9876543210",
            address: "Opp. City Mall, JP Nagar, Bengaluru, Karnataka 560078",
            map_url: "https://share.google/GHfXHbjaAAxjjLl4A",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 3",
            phone: "9812345678",
            address: "Near Metro Station, Yeshwanthpur, Bengaluru 560022",
            map_url: "https://share.google/SNN5ALEjkp91xOOZ7",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 4",
            phone: "9900099000",
            address: "Outer Ring Road, Marathahalli, Bengaluru 560037",
            map_url: "https://share.google/sXDFk3XGTTABcgeFQ",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 5",
            phone: "9988776655",
            address: "BTM Layout, Bengaluru 560076",
            map_url: "https://share.google/H0xWdCkq9Z8pLNW6s",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 6",
            phone: "9123456780",
            address: "Indiranagar 100 ft Rd, Bengaluru 560038",
            map_url: "https://share.google/ETadgHcY5ltqtRlUF",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
        Showroom {
            name: "Shantha Motors – Branch 7",
            phone: "9012345678",
            address: "Koramangala 5th Block, Bengaluru 560095",
            map_url: "https://share.google/sqlxe0B40lwZZy0w9",
            is_primary: false,
            opening_hours: "10:00–7:00",
        },
    ];
}

/// Todas las sucursales
pub fn all() -> &'static [Showroom] {
    &SHOWROOMS
}

/// La sucursal principal
pub fn primary() -> Option<&'static Showroom> {
    SHOWROOMS.iter().find(|s| s.is_primary)
}

/// Enlace tel: con el número sin espacios
pub fn tel_link(phone: &str) -> String {
    let number: String = phone.split_whitespace().collect();
    format!("tel:{}", number)
}

/// Enlace de WhatsApp con solo los dígitos del número
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

/// Convertir una URL de Google Maps en una URL embebible añadiendo
/// `output=embed` si falta. URLs sin host de google/maps devuelven None.
pub fn map_embed_url(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split('/').next()?;
    if !(host.contains("google") || host.contains("maps")) {
        return None;
    }
    if url.contains("output=") {
        Some(url.to_string())
    } else if url.contains('?') {
        Some(format!("{}&output=embed", url))
    } else {
        Some(format!("{}?output=embed", url))
    }
}

/// URL de búsqueda en Google Maps construida a partir de la dirección
pub fn maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_one_primary() {
        assert_eq!(all().len(), 7);
        assert_eq!(all().iter().filter(|s| s.is_primary).count(), 1);
        assert_eq!(primary().unwrap().name, "Shantha Motors – Main Branch");
    }

    #[test]
    fn test_tel_link_strips_whitespace() {
        assert_eq!(tel_link("95389 68888"), "tel:9538968888");
        assert_eq!(tel_link("9538968888"), "tel:9538968888");
    }

    #[test]
    fn test_whatsapp_link_keeps_digits_only() {
        assert_eq!(whatsapp_link("+91 95389-68888"), "https://wa.me/919538968888");
    }

    #[test]
    fn test_map_embed_url_appends_output_param() {
        assert_eq!(
            map_embed_url("https://www.google.com/maps/place/x"),
            Some("https://www.google.com/maps/place/x?output=embed".to_string())
        );
        assert_eq!(
            map_embed_url("https://maps.example.com/view?q=abc"),
            Some("https://maps.example.com/view?q=abc&output=embed".to_string())
        );
        // Ya embebible: se devuelve tal cual
        assert_eq!(
            map_embed_url("https://www.google.com/maps?output=embed"),
            Some("https://www.google.com/maps?output=embed".to_string())
        );
    }

    #[test]
    fn test_map_embed_url_rejects_other_hosts() {
        assert_eq!(map_embed_url("https://example.com/maps-page"), None);
        assert_eq!(map_embed_url("not a url"), None);
    }

    #[test]
    fn test_maps_search_url_encodes_address() {
        let url = maps_search_url("BTM Layout, Bengaluru 560076");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=BTM%20Layout%2C%20Bengaluru%20560076"
        );
    }
}
