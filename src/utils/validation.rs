//! Utilidades de validación
//!
//! Funciones helper para los campos de los formularios: máscara de CPF,
//! fecha y hora de la visita, tienda y URLs de imágenes.

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::models::lead::Store;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"\D").expect("regex NON_DIGIT inválida");
    static ref HTTP_URL: Regex = Regex::new(r"^https?://.+").expect("regex HTTP_URL inválida");
}

const CPF_LEN: usize = 11;

/// Dígitos del CPF, sin la máscara
pub fn cpf_digits(value: &str) -> String {
    NON_DIGIT.replace_all(value, "").into_owned()
}

/// Aplica la máscara XXX.XXX.XXX-XX a los primeros 11 dígitos, de forma progresiva
pub fn format_cpf(value: &str) -> String {
    let digits: String = cpf_digits(value).chars().take(CPF_LEN).collect();
    let len = digits.len();

    match len {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

pub fn is_complete_cpf(value: &str) -> bool {
    cpf_digits(value).len() == CPF_LEN
}

pub fn is_http_url(value: &str) -> bool {
    HTTP_URL.is_match(value)
}

/// Validar que el CPF tenga 11 dígitos
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if !is_complete_cpf(value) {
        let mut error = ValidationError::new("cpf");
        error.add_param("digits".into(), &cpf_digits(value).len());
        return Err(error);
    }
    Ok(())
}

/// Validar el slug de la tienda (barra, botafogo, niteroi)
pub fn validate_store(value: &str) -> Result<(), ValidationError> {
    value.parse::<Store>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("store");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a hora
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        error
    })
}

/// Campos opcionales: vacío es válido
pub fn validate_optional_store(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_store(value)
}

pub fn validate_optional_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_date(value).map(|_| ())
}

pub fn validate_optional_time(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_time(value).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf_progressively() {
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
        // dígitos de más se descartan
        assert_eq!(format_cpf("123456789099999"), "123.456.789-09");
        assert_eq!(format_cpf("abc12x3"), "123");
    }

    #[test]
    fn test_cpf_completeness() {
        assert!(is_complete_cpf("123.456.789-09"));
        assert!(!is_complete_cpf("123.456.789-0"));
        assert!(validate_cpf("").is_err());
    }

    #[test]
    fn test_visit_fields() {
        assert!(validate_date("2025-03-14").is_ok());
        assert!(validate_date("14/03/2025").is_err());
        assert!(validate_time("09:30").is_ok());
        assert!(validate_time("25:00").is_err());
        assert!(validate_optional_time("").is_ok());
        assert!(validate_optional_store("niteroi").is_ok());
        assert!(validate_optional_store("centro").is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(is_http_url("https://images.unsplash.com/photo.jpg"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
    }
}
