//! # facturation
//!
//! French e-invoicing & e-reporting library for the French tax reform:
//! DROM-COM territory classification, Flux 10 flow bucketing, PPF
//! transmission deadlines, and SIREN/SIRET/VAT validation.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Territory and flow rules follow the DGFiP "Spécifications externes" for
//! the Portail Public de Facturation (PPF).
//!
//! ## Quick Start
//!
//! ```rust
//! use facturation::territory::*;
//! use facturation::flow::*;
//!
//! // Guadeloupe participates in e-invoicing like mainland France
//! assert_eq!(territory_kind("GP"), Some(TerritoryKind::DromEinvoicing));
//! assert!(requires_einvoicing("FR", "GP"));
//!
//! // Guyane only has e-reporting, so a B2B sale there lands in Flux 10
//! assert_eq!(
//!     transaction_flow_scope("FR", "GF", Some("FR32123456789")),
//!     Some(FlowScope::International),
//! );
//!
//! // The PPF only knows "FR" for every French territory
//! assert_eq!(ppf_country_code("NC"), "FR");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `territory` (default) | DROM-COM territory table, PPF code mapping, identifier schemes |
//! | `flow` (default) | E-invoicing regime decision, Flux 10 flow bucketing |
//! | `reporting` | Transmission deadlines, flow naming, slice aggregation |
//! | `vat` | SIREN/SIRET and EU VAT format validation |
//! | `all` | Everything |

#[cfg(feature = "territory")]
pub mod territory;

#[cfg(feature = "flow")]
pub mod flow;

#[cfg(feature = "reporting")]
pub mod reporting;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export the classifiers at crate root for convenience
#[cfg(feature = "territory")]
pub use crate::territory::*;

#[cfg(feature = "flow")]
pub use crate::flow::*;
