//! Flux 10 transaction scope bucketing.

use serde::{Deserialize, Serialize};

use super::regime::requires_einvoicing;

/// Flux 10 reporting bucket for a transaction that is not covered by
/// e-invoicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowScope {
    /// Domestic sale to a buyer without a VAT number.
    B2c,
    /// Cross-border B2B — true foreign trade, e-reporting DROM trade and
    /// COM trade all land here regardless of geographic distance.
    International,
}

impl FlowScope {
    /// Stable string tag, as used in reporting configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Self::B2c => "b2c",
            Self::International => "international",
        }
    }

    /// Flux 10 transaction category code (TT-13).
    pub fn category_code(&self) -> &'static str {
        match self {
            Self::B2c => "TLB1",
            Self::International => "TPS1",
        }
    }

    /// Parse from the string tag.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "b2c" => Some(Self::B2c),
            "international" => Some(Self::International),
            _ => None,
        }
    }
}

fn is_b2c_vat(vat: Option<&str>) -> bool {
    // "/" is the conventional placeholder for "no VAT" on partner records.
    matches!(vat, None | Some("" | "/"))
}

/// Classify a transaction into its Flux 10 bucket.
///
/// A missing, empty or placeholder (`"/"`) buyer VAT number makes the
/// sale B2C unconditionally — the territory pair is irrelevant, and this
/// holds even when the buyer territory is unrecognized. With a VAT
/// number present the pair decides: e-invoicing pairs are excluded from
/// Flux 10 entirely (`None`), everything else is international B2B.
pub fn transaction_flow_scope(seller: &str, buyer: &str, buyer_vat: Option<&str>) -> Option<FlowScope> {
    if is_b2c_vat(buyer_vat) {
        return Some(FlowScope::B2c);
    }
    if requires_einvoicing(seller, buyer) {
        return None;
    }
    Some(FlowScope::International)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vat_is_b2c() {
        assert_eq!(transaction_flow_scope("FR", "FR", None), Some(FlowScope::B2c));
        assert_eq!(transaction_flow_scope("FR", "DE", None), Some(FlowScope::B2c));
        assert_eq!(transaction_flow_scope("GF", "NC", None), Some(FlowScope::B2c));
    }

    #[test]
    fn empty_and_placeholder_vat_are_b2c() {
        assert_eq!(transaction_flow_scope("FR", "FR", Some("")), Some(FlowScope::B2c));
        assert_eq!(transaction_flow_scope("FR", "FR", Some("/")), Some(FlowScope::B2c));
    }

    #[test]
    fn b2c_wins_over_unknown_buyer_territory() {
        assert_eq!(transaction_flow_scope("FR", "XX", None), Some(FlowScope::B2c));
        assert_eq!(transaction_flow_scope("FR", "", Some("/")), Some(FlowScope::B2c));
    }

    #[test]
    fn domestic_b2b_is_excluded() {
        assert_eq!(transaction_flow_scope("FR", "FR", Some("FR32123456789")), None);
        assert_eq!(transaction_flow_scope("FR", "GP", Some("FR32123456789")), None);
        assert_eq!(transaction_flow_scope("GP", "MQ", Some("FR32123456789")), None);
    }

    #[test]
    fn foreign_b2b_is_international() {
        assert_eq!(
            transaction_flow_scope("FR", "DE", Some("DE123456789")),
            Some(FlowScope::International)
        );
    }

    #[test]
    fn ereporting_drom_b2b_is_international() {
        assert_eq!(
            transaction_flow_scope("FR", "GF", Some("FR32123456789")),
            Some(FlowScope::International)
        );
        assert_eq!(
            transaction_flow_scope("FR", "NC", Some("FR32123456789")),
            Some(FlowScope::International)
        );
    }

    #[test]
    fn scope_codes() {
        assert_eq!(FlowScope::B2c.code(), "b2c");
        assert_eq!(FlowScope::International.code(), "international");
        assert_eq!(FlowScope::B2c.category_code(), "TLB1");
        assert_eq!(FlowScope::International.category_code(), "TPS1");
        assert_eq!(FlowScope::from_code("b2c"), Some(FlowScope::B2c));
        assert_eq!(FlowScope::from_code("mixed"), None);
    }
}
