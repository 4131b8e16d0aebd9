//! Formatos de presentación en pt-BR

/// Kilometraje con separador de miles: 149999 -> "149.999"
pub fn km_pt_br(km: u32) -> String {
    let digits = km.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Año de fabricación / año modelo
pub fn model_year(year: i32) -> String {
    format!("{}/{}", year, year + 1)
}
