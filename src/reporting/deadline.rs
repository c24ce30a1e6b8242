//! Transmission deadline windows per the AFNOR/PPF calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// What a flow reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    /// Transaction report (Flux 10 transaction data).
    Transaction,
    /// Payment report (encaissements).
    Payment,
}

impl ReportKind {
    /// Stable string tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Payment => "payment",
        }
    }

    /// Periodicity applied when the company has not configured one.
    pub fn default_periodicity(&self) -> Periodicity {
        match self {
            Self::Transaction => Periodicity::Decade,
            Self::Payment => Periodicity::Monthly,
        }
    }
}

/// Reporting periodicity of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// Three slices per month (1-10, 11-20, 21-end).
    Decade,
    /// One transmission per month.
    Monthly,
    /// One transmission every two months.
    Bimonthly,
}

impl Periodicity {
    /// Stable string tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decade => "decade",
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
        }
    }

    /// Parse from the string tag.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "decade" => Some(Self::Decade),
            "monthly" => Some(Self::Monthly),
            "bimonthly" => Some(Self::Bimonthly),
            _ => None,
        }
    }
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Build a date in (year, month), clamping the day to the month length.
fn date_with_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn month_after(date: NaiveDate) -> (i32, u32) {
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}

/// Decade number (1, 2 or 3) a date falls in.
pub fn decade_part(date: NaiveDate) -> u8 {
    match date.day() {
        1..=10 => 1,
        11..=20 => 2,
        _ => 3,
    }
}

/// Send window for a reporting period ending on `period_end`.
///
/// Deadlines follow the PPF calendar:
/// - decade 1-10 is due on the 20th, decade 11-20 on month end, decade
///   21+ on the 10th of the next month (single-day windows);
/// - monthly flows are due on the 10th of the following month;
/// - bimonthly flows may be sent from the 25th to the 30th of the
///   following month.
///
/// Days past the end of a short month clamp to its last day.
pub fn send_window(period_end: NaiveDate, periodicity: Periodicity) -> (NaiveDate, NaiveDate) {
    match periodicity {
        Periodicity::Bimonthly => {
            let (year, month) = month_after(period_end);
            (date_with_day(year, month, 25), date_with_day(year, month, 30))
        }
        Periodicity::Monthly => {
            let (year, month) = month_after(period_end);
            let due = date_with_day(year, month, 10);
            (due, due)
        }
        Periodicity::Decade => {
            let due = match decade_part(period_end) {
                1 => date_with_day(period_end.year(), period_end.month(), 20),
                2 => date_with_day(
                    period_end.year(),
                    period_end.month(),
                    last_day_of_month(period_end.year(), period_end.month()),
                ),
                _ => {
                    let (year, month) = month_after(period_end);
                    date_with_day(year, month, 10)
                }
            };
            (due, due)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_decade_due_on_the_20th() {
        let (start, end) = send_window(date(2026, 3, 10), Periodicity::Decade);
        assert_eq!(start, date(2026, 3, 20));
        assert_eq!(end, date(2026, 3, 20));
    }

    #[test]
    fn second_decade_due_on_month_end() {
        let (start, _) = send_window(date(2026, 3, 15), Periodicity::Decade);
        assert_eq!(start, date(2026, 3, 31));
        let (feb, _) = send_window(date(2026, 2, 20), Periodicity::Decade);
        assert_eq!(feb, date(2026, 2, 28));
    }

    #[test]
    fn third_decade_due_next_month() {
        let (start, _) = send_window(date(2026, 3, 27), Periodicity::Decade);
        assert_eq!(start, date(2026, 4, 10));
    }

    #[test]
    fn third_decade_december_rolls_year() {
        let (start, _) = send_window(date(2025, 12, 31), Periodicity::Decade);
        assert_eq!(start, date(2026, 1, 10));
    }

    #[test]
    fn monthly_due_on_the_10th() {
        let (start, end) = send_window(date(2026, 1, 31), Periodicity::Monthly);
        assert_eq!(start, date(2026, 2, 10));
        assert_eq!(start, end);
    }

    #[test]
    fn bimonthly_window_25_to_30() {
        let (start, end) = send_window(date(2026, 3, 31), Periodicity::Bimonthly);
        assert_eq!(start, date(2026, 4, 25));
        assert_eq!(end, date(2026, 4, 30));
    }

    #[test]
    fn bimonthly_window_clamps_in_february() {
        let (start, end) = send_window(date(2026, 1, 31), Periodicity::Bimonthly);
        assert_eq!(start, date(2026, 2, 25));
        assert_eq!(end, date(2026, 2, 28));
    }

    #[test]
    fn decade_parts() {
        assert_eq!(decade_part(date(2026, 3, 1)), 1);
        assert_eq!(decade_part(date(2026, 3, 10)), 1);
        assert_eq!(decade_part(date(2026, 3, 11)), 2);
        assert_eq!(decade_part(date(2026, 3, 20)), 2);
        assert_eq!(decade_part(date(2026, 3, 21)), 3);
        assert_eq!(decade_part(date(2026, 3, 31)), 3);
    }

    #[test]
    fn default_periodicities() {
        assert_eq!(ReportKind::Transaction.default_periodicity(), Periodicity::Decade);
        assert_eq!(ReportKind::Payment.default_periodicity(), Periodicity::Monthly);
    }

    #[test]
    fn periodicity_code_roundtrip() {
        for p in [Periodicity::Decade, Periodicity::Monthly, Periodicity::Bimonthly] {
            assert_eq!(Periodicity::from_code(p.code()), Some(p));
        }
        assert_eq!(Periodicity::from_code("weekly"), None);
    }
}
