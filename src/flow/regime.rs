//! E-invoicing vs e-reporting regime decision.

use crate::territory::{TerritoryKind, territory_kind};

fn in_einvoicing_zone(code: &str) -> bool {
    matches!(
        territory_kind(code),
        Some(TerritoryKind::Metro | TerritoryKind::DromEinvoicing)
    )
}

/// Decide whether a transaction between two territories must go through
/// e-invoicing (`true`) or falls back to e-reporting (`false`).
///
/// Only the e-invoicing zone qualifies: metropolitan France plus
/// Guadeloupe, Martinique and Réunion. Both sides must be in the zone.
/// Anything touching Guyane or Mayotte (e-reporting DROM), a COM, or a
/// foreign/unknown code is e-reporting — even metro ↔ Guyane.
///
/// Symmetric in its two arguments.
pub fn requires_einvoicing(seller: &str, buyer: &str) -> bool {
    in_einvoicing_zone(seller) && in_einvoicing_zone(buyer)
}
