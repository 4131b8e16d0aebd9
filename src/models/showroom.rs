//! Contenido estático del sitio
//!
//! Slides del hero, tarjetas de categoría, mosaico de la página de visitas,
//! navegación y la galería de imágenes usada por el carrusel y el detalle.

use serde::Serialize;

/// Slide del carrusel principal
#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    pub image: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Tarjeta de categoría de la home; todas llevan al catálogo
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    pub label: &'static str,
    pub image: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub const CATALOG_PATH: &str = "/catalogo";
pub const SCHEDULE_PATH: &str = "/agende-sua-visita";

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        image: "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?auto=format&fit=crop&w=2400&q=80",
        badge: "IPVA Grátis",
        title: "Blindados à pronta entrega",
        subtitle: "O conforto e a segurança que você precisa",
    },
    HeroSlide {
        image: "https://images.unsplash.com/photo-1605559424843-9e4c228bf1c2?auto=format&fit=crop&w=2400&q=80",
        badge: "Primeira parcela só depois da Páscoa",
        title: "Financiamento facilitado",
        subtitle: "Taxas especiais e aprovação rápida",
    },
    HeroSlide {
        image: "https://images.unsplash.com/photo-1558981806-ec527fa84c39?auto=format&fit=crop&w=2400&q=80",
        badge: "Entrada a partir de R$ 5.000",
        title: "Motos e carros seminovos",
        subtitle: "As melhores ofertas você encontra aqui",
    },
];

pub const CATEGORY_CARDS: &[CategoryCard] = &[
    CategoryCard {
        label: "Utilitários",
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1600&q=80",
        href: CATALOG_PATH,
    },
    CategoryCard {
        label: "SUV",
        image: "https://images.unsplash.com/photo-1525609004556-c46c7d6cf023?auto=format&fit=crop&w=1600&q=80",
        href: CATALOG_PATH,
    },
    CategoryCard {
        label: "Sedan",
        image: "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&w=1600&q=80",
        href: CATALOG_PATH,
    },
    CategoryCard {
        label: "Hatch",
        image: "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?auto=format&fit=crop&w=1600&q=80",
        href: CATALOG_PATH,
    },
];

pub const SCHEDULE_MOSAIC: &[&str] = &[
    "https://images.unsplash.com/photo-1542362567-b07e54358753?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1525609004556-c46c7d6cf023?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&w=1600&q=80",
];

const NAV_LINKS: &[(&str, &str)] = &[
    ("Início", "/"),
    ("Catálogo", CATALOG_PATH),
    ("Agende uma visita", SCHEDULE_PATH),
];

/// Menú principal con el ítem de la ruta actual marcado como activo
pub fn navigation(current_path: &str) -> Vec<NavItem> {
    NAV_LINKS
        .iter()
        .map(|&(label, href)| NavItem {
            label,
            href,
            active: href == current_path,
        })
        .collect()
}

/// Índice de una galería circular de imágenes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Las flechas sólo se muestran con más de una imagen
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = if self.current == 0 { self.len - 1 } else { self.current - 1 };
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.current = index.min(self.len - 1);
        }
    }

    /// Contador "2 / 5"
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.len)
    }
}
