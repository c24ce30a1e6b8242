//! Flow identifiers, filenames and tokens for the transport API.

use chrono::NaiveDate;

use super::deadline::ReportKind;
use crate::flow::FlowScope;

/// Flow syntax identifier for Flux 10 reporting payloads.
pub const FLOW_SYNTAX: &str = "FRR";

/// Flow profile transmitted with every outbound flow.
pub const FLOW_PROFILE: &str = "Extended-CTC-FR";

/// Flow direction — this library only builds outbound flows.
pub const FLOW_DIRECTION: &str = "Out";

/// PPF flow type name for a report kind and scope.
///
/// B2C data is aggregated per day; international B2B is reported per
/// transaction (individual/unitary).
pub fn flow_type_name(kind: ReportKind, scope: FlowScope) -> &'static str {
    match (kind, scope) {
        (ReportKind::Transaction, FlowScope::B2c) => "AggregatedCustomerTransactionReport",
        (ReportKind::Transaction, FlowScope::International) => {
            "IndividualCustomerTransactionReport"
        }
        (ReportKind::Payment, FlowScope::B2c) => "AggregatedCustomerPaymentReport",
        (ReportKind::Payment, FlowScope::International) => "UnitaryCustomerPaymentReport",
    }
}

/// Format a date the way the flow service expects it (YYYYMMDD).
pub fn ppf_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Clean a value for use in filenames and transport identifiers.
///
/// Runs of characters outside `[A-Za-z0-9_-]` collapse to a single `_`,
/// the result is capped at 50 characters, and blank input falls back to
/// `default`.
pub fn sanitize_token(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return default.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out.truncate(50);
    if out.is_empty() { default.to_string() } else { out }
}

/// Build the payload filename for a flow.
///
/// `PROFILE_TRACKING.xml`, with an `_rN` suffix once the payload has
/// been rebuilt (revision > 0).
pub fn payload_filename(profile: &str, tracking_id: &str, revision: u32) -> String {
    let profile = sanitize_token(profile, "FRR").to_uppercase();
    let base = sanitize_token(tracking_id, "TRACKING").to_uppercase();
    if revision > 0 {
        format!("{profile}_{base}_r{revision}.xml")
    } else {
        format!("{profile}_{base}.xml")
    }
}

fn take(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Derive a tracking identifier for a flow from the company SIREN, the
/// report kind, the flow scope and the reporting date.
pub fn tracking_id(siren: &str, kind: ReportKind, scope: FlowScope, reporting_date: NaiveDate) -> String {
    let date_token = ppf_date(reporting_date);
    let parts: [&str; 4] = [
        take(siren, 9),
        take(kind.code(), 8),
        take(scope.code(), 8),
        date_token.as_str(),
    ];
    let joined = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_");
    sanitize_token(&joined, "TRACKING").to_uppercase()
}
