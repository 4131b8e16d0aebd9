//! Generador del inventario simulado
//!
//! Produce de forma determinista la colección de vehículos del catálogo a
//! partir de tablas fijas de marcas/modelos, colores, combustibles e imágenes.
//! Al final siempre se agregan las dos motos fijas.

use lazy_static::lazy_static;

use crate::models::vehicle::{Armor, Body, Color, Fuel, Vehicle};

/// Cantidad de carros del inventario por defecto
pub const DEFAULT_FLEET_SIZE: usize = 120;

/// Primer año modelo del inventario; los años cubren BASE_YEAR..BASE_YEAR+11
pub const BASE_YEAR: i32 = 2014;
const YEAR_SPAN: usize = 12;

const KM_STEP: usize = 2397;
const KM_BOUND: usize = 150_000;

const MAKES_AND_MODELS: &[(&str, &[&str])] = &[
    ("Jeep", &["Compass", "Renegade"]),
    ("Toyota", &["Corolla", "Hilux"]),
    ("Honda", &["Civic", "HR-V"]),
    ("Volkswagen", &["T-Cross", "Golf"]),
    ("Hyundai", &["Creta", "HB20"]),
    ("BMW", &["X5", "320i"]),
];

const COLORS: &[Color] = &[
    Color::Preto,
    Color::Branco,
    Color::Prata,
    Color::Cinza,
    Color::Azul,
    Color::Vermelho,
];

const FUELS: &[Fuel] = &[Fuel::Flex, Fuel::Gasolina, Fuel::Diesel, Fuel::Eletrico];

const ARMORS: &[Armor] = &[Armor::Nao, Armor::NivelIIIA];

const PRIMARY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1525609004556-c46c7d6cf023?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&w=1200&q=80",
];

const CAROUSEL_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1494976388531-d1058494cdd8?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1583121274602-3e2820c69888?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1544636331-e26879cd4d9b?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1502877338535-766e1452684a?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?auto=format&fit=crop&w=1200&q=80",
];

const MOTORCYCLE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1609630875171-b1321377ee65?auto=format&fit=crop&w=1200&q=80",
];

/// Reglas de carroceria: la primera subcadena que aparece gana
const BODY_RULES: &[(&[&str], Body)] = &[
    (&["hilux"], Body::Picape),
    (&["golf", "hb20"], Body::Hatch),
    (&["corolla", "civic", "320"], Body::Sedan),
    (&["x5", "compass", "renegade", "hr-v"], Body::Suv),
];

struct MotorcycleTemplate {
    make: &'static str,
    model: &'static str,
    year: i32,
    km: u32,
    fuel: Fuel,
    color: Color,
}

const MOTORCYCLES: &[MotorcycleTemplate] = &[
    MotorcycleTemplate {
        make: "Honda",
        model: "CG 160",
        year: 2023,
        km: 4500,
        fuel: Fuel::Flex,
        color: Color::Azul,
    },
    MotorcycleTemplate {
        make: "Yamaha",
        model: "Fazer 250",
        year: 2022,
        km: 9800,
        fuel: Fuel::Gasolina,
        color: Color::Preto,
    },
];

lazy_static! {
    /// Inventario por defecto, generado una sola vez
    pub static ref DEFAULT_INVENTORY: Vec<Vehicle> = generate_vehicles(DEFAULT_FLEET_SIZE);
}

/// Deduce la carroceria a partir de marca y modelo
pub fn guess_body(make: &str, model: &str) -> Body {
    let haystack = format!("{} {}", make, model).to_lowercase();
    BODY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| haystack.contains(n)))
        .map(|(_, body)| *body)
        .unwrap_or(Body::Utilitario)
}

/// Genera `count` carros más las dos motos fijas (ids `count+1` y `count+2`)
pub fn generate_vehicles(count: usize) -> Vec<Vehicle> {
    let mut list = Vec::with_capacity(count + MOTORCYCLES.len());

    for i in 0..count {
        let (make, models) = MAKES_AND_MODELS[i % MAKES_AND_MODELS.len()];
        let model = models[i % models.len()];
        let armor = ARMORS[(i + 1) % ARMORS.len()];
        let image = PRIMARY_IMAGES[i % PRIMARY_IMAGES.len()].to_string();

        // 3, 4 o 5 imágenes por vehículo
        let image_count = 3 + (i % 3);
        let mut images = Vec::with_capacity(image_count);
        images.push(image.clone());
        for j in 1..image_count {
            images.push(CAROUSEL_IMAGES[(i + j) % CAROUSEL_IMAGES.len()].to_string());
        }

        list.push(Vehicle {
            id: (i + 1) as u32,
            make: make.to_string(),
            model: model.to_string(),
            name: Vehicle::display_name(make, model, armor),
            year: BASE_YEAR + (i % YEAR_SPAN) as i32,
            km: ((i * KM_STEP) % KM_BOUND) as u32,
            fuel: FUELS[i % FUELS.len()],
            armor,
            color: COLORS[i % COLORS.len()],
            body: guess_body(make, model),
            image,
            images,
        });
    }

    let images: Vec<String> = MOTORCYCLE_IMAGES.iter().map(|s| s.to_string()).collect();
    for (offset, moto) in MOTORCYCLES.iter().enumerate() {
        list.push(Vehicle {
            id: (count + offset + 1) as u32,
            make: moto.make.to_string(),
            model: moto.model.to_string(),
            name: Vehicle::display_name(moto.make, moto.model, Armor::Nao),
            year: moto.year,
            km: moto.km,
            fuel: moto.fuel,
            armor: Armor::Nao,
            color: moto.color,
            body: Body::Moto,
            image: images[0].clone(),
            images: images.clone(),
        });
    }

    list
}
