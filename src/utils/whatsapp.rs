//! Enlaces click-to-chat de WhatsApp

use crate::models::vehicle::Vehicle;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Saludo con el vehículo de interés
pub fn vehicle_greeting(vehicle: &Vehicle) -> String {
    format!(
        "Olá! Tenho interesse no {} ({}) cor {}.",
        vehicle.name, vehicle.year, vehicle.color
    )
}

/// Enlace al chat con el saludo ya escrito
pub fn vehicle_link(number: &str, vehicle: &Vehicle) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        number,
        urlencoding::encode(&vehicle_greeting(vehicle))
    )
}

/// Enlace al chat sin mensaje (botón flotante)
pub fn contact_link(number: &str) -> String {
    format!("{}/{}", WHATSAPP_BASE, number)
}
