//! Transmission chain types and transport status mapping.

use serde::{Deserialize, Serialize};

/// Transmission type of a flow (TT-6).
///
/// Every chain starts with an initial transmission; complementary,
/// corrective and rectificative transmissions reference the transport
/// identifier of an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransmissionType {
    /// IN — first transmission for the period.
    Initial,
    /// CO — adds data left out of the initial transmission.
    Complementary,
    /// MO — corrects data already transmitted.
    Corrective,
    /// RE — replaces a transmission entirely.
    Rectificative,
}

impl TransmissionType {
    /// Two-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Initial => "IN",
            Self::Complementary => "CO",
            Self::Corrective => "MO",
            Self::Rectificative => "RE",
        }
    }

    /// Parse from the two-letter wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "IN" => Some(Self::Initial),
            "CO" => Some(Self::Complementary),
            "MO" => Some(Self::Corrective),
            "RE" => Some(Self::Rectificative),
            _ => None,
        }
    }

    /// Whether the flow may be sent as soon as it is ready.
    ///
    /// Initial transmissions wait for their send window; the follow-up
    /// types go out immediately.
    pub fn sends_immediately(&self) -> bool {
        !matches!(self, Self::Initial)
    }
}

/// Internal state derived from a transport gateway status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Submitted, no final acknowledgement yet.
    Pending,
    /// Accepted or delivered.
    Done,
    /// Refused or failed.
    Error,
}

/// Map a raw transport gateway status to an internal state.
///
/// Unknown statuses stay [`TransportState::Pending`] — the gateway gets
/// polled again rather than a flow being marked failed on vocabulary
/// drift. Matching is case-insensitive.
pub fn transport_state(raw_status: &str) -> TransportState {
    match raw_status.trim().to_uppercase().as_str() {
        "ACCEPTED" | "DELIVERED" => TransportState::Done,
        "ERROR" | "REFUSED" => TransportState::Error,
        _ => TransportState::Pending,
    }
}
