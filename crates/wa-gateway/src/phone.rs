//! Phone number normalization to the Indonesian international format.

use thiserror::Error;

/// Calling code every normalized number starts with.
pub const COUNTRY_CODE: &str = "62";

/// Inclusive length bounds of a normalized number, country code included.
pub const MIN_LEN: usize = 10;
pub const MAX_LEN: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    /// `cleaned` is the digits-only form after the prefix rewrite.
    #[error("Invalid phone number format")]
    InvalidFormat { cleaned: String },
}

/// Convert a loosely formatted phone number into `62` followed by digits.
///
/// Non-digits are dropped, a leading trunk `0` becomes `62`, and a bare
/// mobile prefix `8` gets `62` prepended. The result must start with `62`
/// and be 10 to 14 digits long.
pub fn normalize_phone(input: &str) -> Result<String, PhoneError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let clean = if let Some(rest) = digits.strip_prefix('0') {
        format!("{}{}", COUNTRY_CODE, rest)
    } else if digits.starts_with(COUNTRY_CODE) {
        digits
    } else if digits.starts_with('8') {
        format!("{}{}", COUNTRY_CODE, digits)
    } else {
        // Any other leading digit is left alone and rejected below.
        digits
    };

    if !clean.starts_with(COUNTRY_CODE) || !(MIN_LEN..=MAX_LEN).contains(&clean.len()) {
        return Err(PhoneError::InvalidFormat { cleaned: clean });
    }

    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic digit strings of the given length.
    fn digits(len: usize, seed: usize) -> String {
        (0..len)
            .map(|i| char::from(b'0' + ((i * 7 + seed * 3) % 10) as u8))
            .collect()
    }

    #[test]
    fn test_leading_zero_becomes_country_code() {
        for len in 8..=12 {
            for seed in 0..10 {
                let d = digits(len, seed);
                let normalized = normalize_phone(&format!("0{}", d)).unwrap();
                assert_eq!(normalized, format!("62{}", d));
                assert!((MIN_LEN..=MAX_LEN).contains(&normalized.len()));
            }
        }
    }

    #[test]
    fn test_leading_zero_outside_bounds_fails() {
        for seed in 0..10 {
            assert!(normalize_phone(&format!("0{}", digits(13, seed))).is_err());
            assert!(normalize_phone(&format!("0{}", digits(7, seed))).is_err());
        }
    }

    #[test]
    fn test_already_international_is_unchanged() {
        for len in 8..=12 {
            for seed in 0..10 {
                let number = format!("62{}", digits(len, seed));
                assert_eq!(normalize_phone(&number).unwrap(), number);
            }
        }
    }

    #[test]
    fn test_leading_eight_gets_prefix() {
        assert_eq!(normalize_phone("81234567890").unwrap(), "6281234567890");
    }

    #[test]
    fn test_formatting_is_stripped() {
        assert_eq!(normalize_phone("0812-3456-7890").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("+62 812 3456 7890").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("(0812) 3456.7890").unwrap(), "6281234567890");
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            normalize_phone("123"),
            Err(PhoneError::InvalidFormat {
                cleaned: "123".into()
            })
        );
        assert!(normalize_phone("").is_err());
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(normalize_phone("+6281234567").unwrap(), "6281234567");
        assert!(normalize_phone("+628123456").is_err());
        assert_eq!(normalize_phone("62812345678901").unwrap(), "62812345678901");
        assert!(normalize_phone("628123456789012").is_err());
    }

    #[test]
    fn test_international_out_of_bounds_fails() {
        assert!(normalize_phone("6212345").is_err());
        assert!(normalize_phone(&format!("62{}", digits(13, 1))).is_err());
    }

    #[test]
    fn test_other_leading_digit_passes_through_and_fails() {
        let err = normalize_phone("71234567890").unwrap_err();
        assert_eq!(
            err,
            PhoneError::InvalidFormat {
                cleaned: "71234567890".into()
            }
        );
        assert!(normalize_phone("+1 415 555 1234").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = normalize_phone("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number format");
    }
}
