//! Business identifier schemes for territories outside the SIREN registry.

use serde::{Deserialize, Serialize};

/// Identifier scheme for a territory that does not register businesses
/// with INSEE.
///
/// The qualifier is the ICD/EAS code carried next to the identifier in
/// party identification, the same way a SIREN is qualified with `0002`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierScheme {
    /// Numeric scheme qualifier (e.g. "0228").
    pub qualifier: &'static str,
    /// Register name (e.g. "RIDET").
    pub name: &'static str,
}

impl IdentifierScheme {
    /// New Caledonia business register.
    pub const RIDET: Self = Self {
        qualifier: "0228",
        name: "RIDET",
    };
    /// French Polynesia business register.
    pub const TAHITI: Self = Self {
        qualifier: "0229",
        name: "TAHITI",
    };
    /// Wallis-et-Futuna business register.
    pub const WALLIS_FUTUNA: Self = Self {
        qualifier: "0227",
        name: "Wallis-et-Futuna",
    };
}

/// Return the specific identifier scheme for a territory.
///
/// Only New Caledonia, French Polynesia and Wallis-et-Futuna keep their
/// own registers. Every other code — all DROM, the remaining COM and
/// `"FR"` itself — uses SIREN and returns `None`.
pub fn specific_identifier_scheme(code: &str) -> Option<IdentifierScheme> {
    match code {
        "NC" => Some(IdentifierScheme::RIDET),
        "PF" => Some(IdentifierScheme::TAHITI),
        "WF" => Some(IdentifierScheme::WALLIS_FUTUNA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nc_uses_ridet() {
        let scheme = specific_identifier_scheme("NC").unwrap();
        assert_eq!(scheme.qualifier, "0228");
        assert_eq!(scheme.name, "RIDET");
    }

    #[test]
    fn pf_uses_tahiti() {
        let scheme = specific_identifier_scheme("PF").unwrap();
        assert_eq!(scheme.qualifier, "0229");
        assert_eq!(scheme.name, "TAHITI");
    }

    #[test]
    fn wf_has_own_qualifier() {
        assert_eq!(specific_identifier_scheme("WF").unwrap().qualifier, "0227");
    }

    #[test]
    fn siren_territories_return_none() {
        for code in ["FR", "GP", "MQ", "RE", "GF", "YT", "BL", "MF", "PM", "TF", "DE", ""] {
            assert_eq!(specific_identifier_scheme(code), None);
        }
    }
}
