//! E-reporting transmission mechanics: deadlines, naming, aggregation.
//!
//! The pure computation behind a Flux 10 transmission — when a flow must
//! be sent (decade/monthly/bimonthly windows), how it is labelled on the
//! wire (flow type names, tracking identifiers, payload filenames) and
//! how transactions aggregate into per-day slices. Payload rendering and
//! transport itself live with the caller.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturation::reporting::*;
//!
//! let period_end = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
//! let (start, end) = send_window(period_end, Periodicity::Decade);
//! // First decade of March is due on the 20th
//! assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
//! assert_eq!(start, end);
//! ```

mod deadline;
mod naming;
mod slice;
mod transmission;

pub use deadline::{Periodicity, ReportKind, decade_part, send_window};
pub use naming::{
    FLOW_DIRECTION, FLOW_PROFILE, FLOW_SYNTAX, flow_type_name, payload_filename, ppf_date,
    sanitize_token, tracking_id,
};
pub use slice::{DocumentKind, ReportError, Slice, Transaction, build_slices};
pub use transmission::{TransmissionType, TransportState, transport_state};
