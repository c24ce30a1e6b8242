//! Per-day slice aggregation of reportable transactions.
//!
//! A flow payload is cut into slices, one per (date, document kind)
//! pair, so that a correction can later target a single day without
//! resending the whole period.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document kind of a reportable transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Invoice or receipt.
    Sale,
    /// Credit note.
    Refund,
}

impl DocumentKind {
    /// Stable string tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Refund => "refund",
        }
    }
}

/// A reportable transaction, reduced to what aggregation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Invoice date.
    pub date: NaiveDate,
    /// Sale or refund.
    pub kind: DocumentKind,
    /// Tax-included amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// One aggregated slice of a flow payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Date shared by all transactions in the slice.
    pub date: NaiveDate,
    /// Document kind shared by all transactions in the slice.
    pub kind: DocumentKind,
    /// Number of aggregated transactions.
    pub transaction_count: usize,
    /// Total amount, rounded to 2 decimal places.
    pub total: Decimal,
}

/// Errors raised while aggregating transactions into slices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The transaction set was empty.
    #[error("no transactions to aggregate")]
    Empty,

    /// A flow aggregates amounts of a single currency.
    #[error("mixed currencies in one flow: {0} and {1}")]
    MixedCurrencies(String, String),
}

/// Aggregate transactions into slices, one per (date, kind) pair.
///
/// Slices come back ordered by date, sales before refunds within a day.
/// All transactions must share one currency; amounts are summed exactly
/// and rounded half-away-from-zero to 2 decimal places at the end.
pub fn build_slices(transactions: &[Transaction]) -> Result<Vec<Slice>, ReportError> {
    let first = transactions.first().ok_or(ReportError::Empty)?;
    let currency = &first.currency;

    let mut groups: BTreeMap<(NaiveDate, DocumentKind), (usize, Decimal)> = BTreeMap::new();
    for tx in transactions {
        if tx.currency != *currency {
            return Err(ReportError::MixedCurrencies(
                currency.clone(),
                tx.currency.clone(),
            ));
        }
        let entry = groups.entry((tx.date, tx.kind)).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += tx.amount;
    }

    Ok(groups
        .into_iter()
        .map(|((date, kind), (transaction_count, total))| Slice {
            date,
            kind,
            transaction_count,
            total: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect())
}
