//! VAT ID format validation.

use std::fmt;

/// Error returned when an identifier fails format validation.
#[derive(Debug, Clone)]
pub struct VatFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for VatFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatFormatError {}

/// Validate a French VAT number body (2-character key + 9-digit SIREN).
///
/// When the key is numeric it is verified against the SIREN:
/// `key == (12 + 3 * (siren mod 97)) mod 97`. Alphanumeric keys (issued
/// to some non-established companies) are accepted on shape alone.
fn fr_vat_valid(number: &str) -> bool {
    if number.len() != 11 {
        return false;
    }
    let (key, siren) = number.split_at(2);
    if !siren.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match (key.parse::<u64>(), siren.parse::<u64>()) {
        (Ok(key), Ok(siren)) => key == (12 + 3 * (siren % 97)) % 97,
        _ => key.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}

/// Validate an EU VAT ID by format (no network call).
///
/// The input must include the 2-letter country prefix (e.g.
/// "FR32123456789"). French numbers get their key verified against the
/// SIREN; other countries are checked on shape only, covering the buyer
/// countries an international Flux 10 payload is likely to carry.
/// Returns the (country_code, number) split on success.
pub fn validate_vat_format(vat_id: &str) -> Result<(&str, &str), VatFormatError> {
    let vat_id = vat_id.trim();
    if vat_id.len() < 4 {
        return Err(VatFormatError {
            value: vat_id.into(),
            reason: "too short — must be at least 4 characters".into(),
        });
    }
    if !vat_id.is_ascii() {
        return Err(VatFormatError {
            value: vat_id.into(),
            reason: "must be ASCII".into(),
        });
    }

    let country = &vat_id[..2];
    let number = &vat_id[2..];
    let country_upper = country.to_uppercase();

    if country_upper == "FR" {
        if fr_vat_valid(number) {
            return Ok((country, number));
        }
        return Err(VatFormatError {
            value: vat_id.into(),
            reason: "invalid French VAT — key does not match SIREN".into(),
        });
    }

    type VatShape = fn(&str) -> bool;
    let shapes: &[(&str, VatShape)] = &[
        ("AT", |n| {
            n.len() == 9 && n.starts_with('U') && n[1..].chars().all(|c| c.is_ascii_digit())
        }),
        ("BE", |n| n.len() == 10 && n.chars().all(|c| c.is_ascii_digit())),
        ("DE", |n| {
            n.len() == 9 && n.chars().all(|c| c.is_ascii_digit()) && n.as_bytes()[0] != b'0'
        }),
        ("DK", |n| n.len() == 8 && n.chars().all(|c| c.is_ascii_digit())),
        ("ES", |n| n.len() == 9 && n.chars().all(|c| c.is_ascii_alphanumeric())),
        ("FI", |n| n.len() == 8 && n.chars().all(|c| c.is_ascii_digit())),
        ("IE", |n| {
            (n.len() == 8 || n.len() == 9) && n.chars().all(|c| c.is_ascii_alphanumeric())
        }),
        ("IT", |n| n.len() == 11 && n.chars().all(|c| c.is_ascii_digit())),
        ("LU", |n| n.len() == 8 && n.chars().all(|c| c.is_ascii_digit())),
        ("NL", |n| {
            n.len() == 12
                && n[..9].chars().all(|c| c.is_ascii_digit())
                && n.as_bytes()[9] == b'B'
                && n[10..].chars().all(|c| c.is_ascii_digit())
        }),
        ("PL", |n| n.len() == 10 && n.chars().all(|c| c.is_ascii_digit())),
        ("PT", |n| n.len() == 9 && n.chars().all(|c| c.is_ascii_digit())),
        ("SE", |n| n.len() == 12 && n.chars().all(|c| c.is_ascii_digit())),
        // XI (Northern Ireland) keeps the GB shape
        ("XI", |n| n.len() == 9 && n.chars().all(|c| c.is_ascii_digit())),
    ];

    for &(code, shape) in shapes {
        if country_upper == code {
            if shape(number) {
                return Ok((country, number));
            }
            return Err(VatFormatError {
                value: vat_id.into(),
                reason: format!("invalid format for country {code}"),
            });
        }
    }

    Err(VatFormatError {
        value: vat_id.into(),
        reason: format!("unknown country code '{country}'"),
    })
}

/// Extract the SIREN from a French VAT number.
///
/// Returns `None` when the input is not a well-formed French VAT.
pub fn siren_of_vat(vat_id: &str) -> Option<&str> {
    let vat_id = vat_id.trim();
    let (country, number) = validate_vat_format(vat_id).ok()?;
    if country.to_uppercase() == "FR" {
        Some(&number[2..])
    } else {
        None
    }
}
