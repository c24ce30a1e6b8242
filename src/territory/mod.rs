//! DROM-COM territory classification and PPF country-code mapping.
//!
//! Metropolitan France, the five overseas departments (DROM) and the
//! overseas collectivities (COM) each sit in a different corner of the
//! e-invoicing reform. This module answers the three questions the
//! reporting pipeline keeps asking about a partner's country code:
//! is it French at all, which regime corner does it sit in, and what
//! code does the PPF expect on the wire.
//!
//! Every function here is total: `""`, unknown codes and foreign
//! countries all get a defined answer instead of an error. Dirty
//! partner records must not crash a reporting run.

mod ppf;
mod scheme;
mod table;

pub use ppf::ppf_country_code;
pub use scheme::{IdentifierScheme, specific_identifier_scheme};
pub use table::{
    TerritoryKind, VatRegime, is_drom_com, is_france_territory, territory_kind, vat_regime,
};
