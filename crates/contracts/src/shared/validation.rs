//! Проверки полей форм. Backend проверяет то же самое; здесь - только для
//! мгновенной обратной связи в модальных окнах.

use super::error::RuleError;

const NAME_PUNCTUATION: &[char] = &[' ', '-', '.', '&', '/', '(', ')'];

/// Наименование справочника: 2..=60 символов после trim, буквы/цифры/пунктуация.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), RuleError> {
    validate_text(field, value, 2, 60)?;
    if let Some(bad) = value
        .trim()
        .chars()
        .find(|c| !c.is_alphanumeric() && !NAME_PUNCTUATION.contains(c))
    {
        return Err(RuleError::field(
            field,
            format!("contiene un carácter no permitido: '{}'", bad),
        ));
    }
    Ok(())
}

/// Обязательный текст с ограничением длины (в символах, после trim)
pub fn validate_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), RuleError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(RuleError::field(field, "es obligatorio"));
    }
    if len < min {
        return Err(RuleError::field(
            field,
            format!("debe tener al menos {} caracteres", min),
        ));
    }
    if len > max {
        return Err(RuleError::field(
            field,
            format!("no puede superar {} caracteres", max),
        ));
    }
    Ok(())
}

/// Необязательный текст: пустое значение допустимо
pub fn validate_optional_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), RuleError> {
    if value.trim().chars().count() > max {
        return Err(RuleError::field(
            field,
            format!("no puede superar {} caracteres", max),
        ));
    }
    Ok(())
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Ровно `len` цифр
pub fn validate_digits(field: &'static str, value: &str, len: usize) -> Result<(), RuleError> {
    let value = value.trim();
    if !is_digits(value) || value.len() != len {
        return Err(RuleError::field(field, format!("debe tener {} dígitos", len)));
    }
    Ok(())
}

/// Email: пусто либо `local@domain.tld`
pub fn validate_email(field: &'static str, value: &str) -> Result<(), RuleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let invalid = || RuleError::field(field, "no es un correo válido");
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Телефон: пусто либо 7..=15 цифр с необязательным `+` в начале
pub fn validate_phone(field: &'static str, value: &str) -> Result<(), RuleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let digits = value.strip_prefix('+').unwrap_or(value);
    if !is_digits(digits) || !(7..=15).contains(&digits.len()) {
        return Err(RuleError::field(field, "debe tener entre 7 y 15 dígitos"));
    }
    Ok(())
}

/// Цвет `#RRGGBB`; пустое значение допустимо
pub fn validate_hex_color(field: &'static str, value: &str) -> Result<(), RuleError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match value.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) => Ok(()),
        _ => Err(RuleError::field(field, "debe tener el formato #RRGGBB")),
    }
}

pub fn validate_non_negative(field: &'static str, value: f64) -> Result<(), RuleError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RuleError::field(field, "no puede ser negativo"));
    }
    Ok(())
}

pub fn validate_positive(field: &'static str, value: f64) -> Result<(), RuleError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RuleError::field(field, "debe ser mayor que cero"));
    }
    Ok(())
}

/// Разбор числа из поля ввода: допускает запятую как десятичный разделитель
pub fn parse_amount(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("nombre", "Bebidas").is_ok());
        assert!(validate_name("nombre", "  Útiles & Oficina (A-Z) ").is_ok());
        assert!(validate_name("nombre", "A").is_err());
        assert!(validate_name("nombre", "   ").is_err());
        assert!(validate_name("nombre", "Bebidas<script>").is_err());
        assert!(validate_name("nombre", "D'Onofrio").is_err());
        assert!(validate_name("nombre", &"x".repeat(61)).is_err());
    }

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("dni", "12345678", 8).is_ok());
        assert!(validate_digits("dni", "1234567", 8).is_err());
        assert!(validate_digits("dni", "1234567a", 8).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("correo", "").is_ok());
        assert!(validate_email("correo", "ventas@tienda.pe").is_ok());
        assert!(validate_email("correo", "ventas@tienda").is_err());
        assert!(validate_email("correo", "@tienda.pe").is_err());
        assert!(validate_email("correo", "a b@tienda.pe").is_err());
        assert!(validate_email("correo", "a@b@tienda.pe").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("teléfono", "").is_ok());
        assert!(validate_phone("teléfono", "987654321").is_ok());
        assert!(validate_phone("teléfono", "+51987654321").is_ok());
        assert!(validate_phone("teléfono", "12345").is_err());
        assert!(validate_phone("teléfono", "98765-4321").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("hex", "#FF00aa").is_ok());
        assert!(validate_hex_color("hex", "").is_ok());
        assert!(validate_hex_color("hex", "FF00AA").is_err());
        assert!(validate_hex_color("hex", "#GG0000").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12,50"), Some(12.5));
        assert_eq!(parse_amount(" 3 "), Some(3.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
