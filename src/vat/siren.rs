//! SIREN and SIRET validation (Luhn).

use super::format::VatFormatError;

fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut d = c.to_digit(10).unwrap_or(0);
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

fn clean_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a SIREN (9-digit INSEE company identifier).
///
/// Accepts common display formats with spaces or dots
/// (e.g. "552 100 554"). Returns the cleaned 9-digit number on success.
pub fn validate_siren(siren: &str) -> Result<String, VatFormatError> {
    let cleaned = clean_digits(siren);
    if cleaned.len() != 9 {
        return Err(VatFormatError {
            value: siren.into(),
            reason: format!("expected 9 digits, got {}", cleaned.len()),
        });
    }
    if !luhn_valid(&cleaned) {
        return Err(VatFormatError {
            value: siren.into(),
            reason: "Luhn checksum failed".into(),
        });
    }
    Ok(cleaned)
}

/// Validate a SIRET (14-digit INSEE establishment identifier).
///
/// Returns the cleaned 14-digit number on success. La Poste
/// establishments (SIREN 356000000) do not follow Luhn; they validate
/// when the digit sum is a multiple of 5.
pub fn validate_siret(siret: &str) -> Result<String, VatFormatError> {
    let cleaned = clean_digits(siret);
    if cleaned.len() != 14 {
        return Err(VatFormatError {
            value: siret.into(),
            reason: format!("expected 14 digits, got {}", cleaned.len()),
        });
    }
    let valid = if cleaned.starts_with("356000000") {
        let digit_sum: u32 = cleaned.chars().filter_map(|c| c.to_digit(10)).sum();
        digit_sum % 5 == 0
    } else {
        luhn_valid(&cleaned)
    };
    if !valid {
        return Err(VatFormatError {
            value: siret.into(),
            reason: "checksum failed".into(),
        });
    }
    Ok(cleaned)
}
