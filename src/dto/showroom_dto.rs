use serde::Serialize;

use crate::services::showroom_directory::{
    map_embed_url, maps_search_url, tel_link, whatsapp_link, Showroom,
};

// Response de sucursal con los enlaces de contacto ya derivados
#[derive(Debug, Serialize)]
pub struct ShowroomResponse {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub is_primary: bool,
    pub opening_hours: String,
    pub links: ContactLinks,
}

#[derive(Debug, Serialize)]
pub struct ContactLinks {
    pub call: String,
    pub whatsapp: String,
    pub map: String,
    pub map_embed: Option<String>,
    pub map_search: String,
}

impl From<&Showroom> for ShowroomResponse {
    fn from(showroom: &Showroom) -> Self {
        Self {
            name: showroom.name.to_string(),
            phone: showroom.phone.to_string(),
            address: showroom.address.to_string(),
            is_primary: showroom.is_primary,
            opening_hours: showroom.opening_hours.to_string(),
            links: ContactLinks {
                call: tel_link(showroom.phone),
                whatsapp: whatsapp_link(showroom.phone),
                map: showroom.map_url.to_string(),
                map_embed: map_embed_url(showroom.map_url),
                map_search: maps_search_url(showroom.address),
            },
        }
    }
}
