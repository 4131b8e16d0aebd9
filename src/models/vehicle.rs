//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del inventario de seminovos y los
//! enums de sus atributos fijos (combustível, blindagem, cor, carroceria).
//! Los enums se serializan con sus etiquetas en portugués.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sufijo que se agrega al nombre de los vehículos blindados
pub const ARMORED_SUFFIX: &str = "Blindado";

/// Error al interpretar una etiqueta de atributo
#[derive(Debug, Error, PartialEq, Eq)]
#[error("valor '{value}' inválido para {field}")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub value: String,
}

/// Genera `label()`, `ALL`, `Display` y `FromStr` para un enum de etiquetas fijas.
/// `FromStr` acepta la etiqueta sin distinguir mayúsculas.
macro_rules! labeled_enum {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().to_lowercase() == wanted)
                    .ok_or_else(|| UnknownLabel {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labeled_enum!(Fuel, "fuel", {
    Flex => "Flex",
    Gasolina => "Gasolina",
    Diesel => "Diesel",
    Eletrico => "Elétrico",
});

labeled_enum!(Armor, "armor", {
    Nao => "Não",
    NivelIIIA => "Nível III-A",
});

labeled_enum!(Color, "color", {
    Preto => "Preto",
    Branco => "Branco",
    Prata => "Prata",
    Cinza => "Cinza",
    Azul => "Azul",
    Vermelho => "Vermelho",
});

// El orden de declaración es el orden de los botones de carroceria
labeled_enum!(Body, "body", {
    Hatch => "Hatch",
    Moto => "Moto",
    Picape => "Picape",
    Sedan => "Sedan",
    Suv => "SUV",
    Utilitario => "Utilitario",
});

impl Armor {
    pub fn is_armored(&self) -> bool {
        matches!(self, Armor::NivelIIIA)
    }
}

/// Vehículo del inventario. Inmutable después de generado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub name: String,
    pub year: i32,
    pub km: u32,
    pub fuel: Fuel,
    pub armor: Armor,
    pub color: Color,
    pub body: Body,
    pub image: String,
    pub images: Vec<String>,
}

impl Vehicle {
    /// Nombre comercial: "{make} {model}", con el sufijo de blindado cuando aplica
    pub fn display_name(make: &str, model: &str, armor: Armor) -> String {
        if armor.is_armored() {
            format!("{} {} {}", make, model, ARMORED_SUFFIX)
        } else {
            format!("{} {}", make, model)
        }
    }

    /// Texto sobre el que se hace la búsqueda libre, ya en minúsculas
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            self.make,
            self.model,
            self.name,
            self.year,
            self.km,
            self.fuel,
            self.armor,
            self.color,
            self.body
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        assert_eq!("nível iii-a".parse::<Armor>(), Ok(Armor::NivelIIIA));
        assert_eq!("SUV".parse::<Body>(), Ok(Body::Suv));
        assert_eq!(" elétrico ".parse::<Fuel>(), Ok(Fuel::Eletrico));
        assert!("Verde".parse::<Color>().is_err());
    }

    #[test]
    fn test_serializes_portuguese_labels() {
        let json = serde_json::to_string(&Armor::Nao).unwrap();
        assert_eq!(json, "\"Não\"");
        let body: Body = serde_json::from_str("\"Utilitario\"").unwrap();
        assert_eq!(body, Body::Utilitario);
    }

    #[test]
    fn test_display_name_marks_armored() {
        assert_eq!(Vehicle::display_name("BMW", "X5", Armor::NivelIIIA), "BMW X5 Blindado");
        assert_eq!(Vehicle::display_name("BMW", "X5", Armor::Nao), "BMW X5");
    }

    #[test]
    fn test_body_order_matches_filter_buttons() {
        let labels: Vec<&str> = Body::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Hatch", "Moto", "Picape", "Sedan", "SUV", "Utilitario"]);
    }
}
