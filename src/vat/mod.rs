//! SIREN/SIRET and EU VAT format validation.
//!
//! Format-only checks, no network. International B2B transactions need a
//! plausible buyer VAT number before they enter a Flux 10 payload, and
//! French parties need a valid SIREN/SIRET for party identification.
//!
//! # Example
//!
//! ```rust
//! use facturation::vat::*;
//!
//! assert!(validate_siren("552 100 554").is_ok());
//! assert!(validate_vat_format("FR32123456789").is_ok());
//! assert_eq!(siren_of_vat("FR32123456789"), Some("123456789"));
//! ```

mod format;
mod siren;

pub use format::{VatFormatError, siren_of_vat, validate_vat_format};
pub use siren::{validate_siren, validate_siret};
