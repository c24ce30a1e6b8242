//! Static DROM-COM territory table (ISO 3166-1 alpha-2).

use serde::{Deserialize, Serialize};

/// Where a French territory sits in the e-invoicing reform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerritoryKind {
    /// Metropolitan France.
    Metro,
    /// DROM inside the e-invoicing mandate (Guadeloupe, Martinique, Réunion).
    DromEinvoicing,
    /// DROM covered by e-reporting only (Guyane, Mayotte).
    DromEreporting,
    /// Overseas collectivity with its own tax autonomy.
    Com,
}

impl TerritoryKind {
    /// Stable string tag, as used in reporting configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::DromEinvoicing => "drom_einvoicing",
            Self::DromEreporting => "drom_ereporting",
            Self::Com => "com",
        }
    }

    /// Parse from the string tag.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "metro" => Some(Self::Metro),
            "drom_einvoicing" => Some(Self::DromEinvoicing),
            "drom_ereporting" => Some(Self::DromEreporting),
            "com" => Some(Self::Com),
            _ => None,
        }
    }
}

/// VAT treatment tag for a territory.
///
/// Informational only — the regime decision in [`crate::flow`] works off
/// [`TerritoryKind`], not off this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatRegime {
    /// VAT applies as in metropolitan France (CGI art. 294 excludes Guyane/Mayotte).
    SimilarToMetro,
    /// VAT provisionally not applicable; trade is handled like exports.
    SpecificExport,
    /// Territory levies its own consumption tax outside the French VAT system.
    NonDomestic,
}

/// DROM codes inside the e-invoicing mandate. Sorted for binary search.
static DROM_EINVOICING: &[&str] = &["GP", "MQ", "RE"];

/// DROM codes covered by e-reporting only. Sorted for binary search.
static DROM_EREPORTING: &[&str] = &["GF", "YT"];

/// COM codes (fiscal autonomy, outside the VAT territory). Sorted for binary search.
static COM: &[&str] = &["BL", "MF", "NC", "PF", "PM", "TF", "WF"];

/// Classify a country code into its territory kind.
///
/// Returns `None` for foreign countries, unknown codes and empty input.
pub fn territory_kind(code: &str) -> Option<TerritoryKind> {
    if code == "FR" {
        return Some(TerritoryKind::Metro);
    }
    if DROM_EINVOICING.binary_search(&code).is_ok() {
        return Some(TerritoryKind::DromEinvoicing);
    }
    if DROM_EREPORTING.binary_search(&code).is_ok() {
        return Some(TerritoryKind::DromEreporting);
    }
    if COM.binary_search(&code).is_ok() {
        return Some(TerritoryKind::Com);
    }
    None
}

/// Check whether `code` designates any French territory — metropolitan
/// France, a DROM or a COM.
pub fn is_france_territory(code: &str) -> bool {
    territory_kind(code).is_some()
}

/// Check whether `code` is an overseas territory (DROM or COM).
///
/// `"FR"` itself is metropolitan and never counts as DROM-COM.
pub fn is_drom_com(code: &str) -> bool {
    !matches!(territory_kind(code), None | Some(TerritoryKind::Metro))
}

/// VAT treatment tag for a French territory, `None` for anything else.
pub fn vat_regime(code: &str) -> Option<VatRegime> {
    match territory_kind(code)? {
        TerritoryKind::Metro | TerritoryKind::DromEinvoicing => Some(VatRegime::SimilarToMetro),
        TerritoryKind::DromEreporting => Some(VatRegime::SpecificExport),
        TerritoryKind::Com => Some(VatRegime::NonDomestic),
    }
}
