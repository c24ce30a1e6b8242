#![cfg(feature = "vat")]

use facturation::vat::*;

// ---------------------------------------------------------------------------
// SIREN / SIRET
// ---------------------------------------------------------------------------

#[test]
fn siren_accepts_display_formats() {
    assert_eq!(validate_siren("552100554").unwrap(), "552100554");
    assert_eq!(validate_siren("552 100 554").unwrap(), "552100554");
    assert_eq!(validate_siren("552.100.554").unwrap(), "552100554");
}

#[test]
fn siren_rejects_bad_checksum_and_length() {
    assert!(validate_siren("552100555").is_err());
    assert!(validate_siren("12345678").is_err());
    assert!(validate_siren("").is_err());
    assert!(validate_siren("abcdefghi").is_err());
}

#[test]
fn siret_luhn() {
    assert!(validate_siret("55210055400013").is_ok());
    assert!(validate_siret("55210055400014").is_err());
}

#[test]
fn siret_la_poste_exception() {
    assert!(validate_siret("35600000000001").is_ok());
    assert!(validate_siret("35600000000002").is_err());
}

// ---------------------------------------------------------------------------
// VAT format — France
// ---------------------------------------------------------------------------

#[test]
fn fr_vat_key_verified_against_siren() {
    assert!(validate_vat_format("FR32123456789").is_ok());
    assert!(validate_vat_format("FR33123456789").is_err());
}

#[test]
fn fr_vat_with_letter_key() {
    assert!(validate_vat_format("FRXX123456789").is_ok());
}

#[test]
fn siren_extracted_from_fr_vat() {
    assert_eq!(siren_of_vat("FR32123456789"), Some("123456789"));
    assert_eq!(siren_of_vat("FR33123456789"), None);
    assert_eq!(siren_of_vat("DE123456789"), None);
}

// ---------------------------------------------------------------------------
// VAT format — foreign buyers
// ---------------------------------------------------------------------------

#[test]
fn common_buyer_countries_accepted() {
    for vat in [
        "DE123456789",
        "BE0123456789",
        "NL123456789B01",
        "IT12345678901",
        "ESX1234567X",
        "LU12345678",
        "ATU12345678",
        "XI123456789",
    ] {
        assert!(validate_vat_format(vat).is_ok(), "{vat}");
    }
}

#[test]
fn shape_violations_rejected() {
    assert!(validate_vat_format("DE12345678").is_err());
    assert!(validate_vat_format("BE123456789").is_err());
    assert!(validate_vat_format("NL123456789A01").is_err());
    assert!(validate_vat_format("ZZ12345678").is_err());
}

#[test]
fn error_carries_value_and_reason() {
    let err = validate_vat_format("DE12").unwrap_err();
    assert_eq!(err.value, "DE12");
    assert!(!err.reason.is_empty());
    assert!(err.to_string().contains("DE12"));
}
