//! E-invoicing regime decision and Flux 10 flow bucketing.
//!
//! Given the seller and buyer territories of a transaction, decide
//! whether the invoice travels through e-invoicing (structured invoice
//! exchanged via PDP) or falls back to e-reporting, and in the latter
//! case which Flux 10 bucket the transaction lands in.
//!
//! # Example
//!
//! ```rust
//! use facturation::flow::*;
//!
//! // Domestic B2B is handled by e-invoicing, excluded from Flux 10
//! assert_eq!(transaction_flow_scope("FR", "FR", Some("FR32123456789")), None);
//!
//! // No VAT number means B2C, whatever the territories
//! assert_eq!(transaction_flow_scope("FR", "DE", None), Some(FlowScope::B2c));
//! ```

mod regime;
mod scope;

pub use regime::requires_einvoicing;
pub use scope::{FlowScope, transaction_flow_scope};
