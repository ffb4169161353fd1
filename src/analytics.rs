// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chart-ready views derived from a ledger snapshot. Nothing here mutates the ledger.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeDelta};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryAggregate, ExpenseRecord, PeriodTotal, SeriesPoint};

/// Minimum number of records before a forecast is produced.
pub const FORECAST_MIN_RECORDS: usize = 6;
pub const DEFAULT_FORECAST_DAYS: u32 = 7;
pub const MAX_FORECAST_DAYS: u32 = 366;

/// Per-category sums in the order each category first appears in the ledger.
pub fn category_totals(ledger: &[ExpenseRecord]) -> Vec<CategoryAggregate> {
    let mut out: Vec<CategoryAggregate> = Vec::new();
    for rec in ledger {
        match out.iter_mut().find(|a| a.category == rec.category) {
            Some(agg) => agg.amount = agg.amount.saturating_add(rec.amount),
            None => out.push(CategoryAggregate {
                category: rec.category,
                amount: rec.amount,
            }),
        }
    }
    out
}

/// Sum of all amounts, saturating at `Decimal::MAX` rather than overflowing.
pub fn grand_total(ledger: &[ExpenseRecord]) -> Decimal {
    ledger
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount))
}

/// One point per record, in insertion order. Backdated records are not re-sorted.
pub fn time_series(ledger: &[ExpenseRecord]) -> Vec<SeriesPoint> {
    ledger
        .iter()
        .map(|r| SeriesPoint {
            date: r.date,
            amount: r.amount,
        })
        .collect()
}

pub fn daily_totals(ledger: &[ExpenseRecord]) -> Vec<PeriodTotal> {
    totals_by(ledger, |d| d.format("%Y-%m-%d").to_string())
}

/// Totals per ISO week, labelled `YYYY-Www`.
pub fn weekly_totals(ledger: &[ExpenseRecord]) -> Vec<PeriodTotal> {
    totals_by(ledger, |d| {
        let w = d.iso_week();
        format!("{}-W{:02}", w.year(), w.week())
    })
}

pub fn monthly_totals(ledger: &[ExpenseRecord]) -> Vec<PeriodTotal> {
    totals_by(ledger, |d| d.format("%Y-%m").to_string())
}

fn totals_by<F>(ledger: &[ExpenseRecord], label: F) -> Vec<PeriodTotal>
where
    F: Fn(&NaiveDate) -> String,
{
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for rec in ledger {
        let total = map.entry(label(&rec.date)).or_insert(Decimal::ZERO);
        *total = total.saturating_add(rec.amount);
    }
    map.into_iter()
        .map(|(period, amount)| PeriodTotal { period, amount })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Least-squares trend of amount over days since the earliest record,
/// projected over the `days` calendar days following the latest record.
///
/// Returns an empty vec until the ledger holds `FORECAST_MIN_RECORDS` records.
/// The horizon is capped at `MAX_FORECAST_DAYS` and stops at the last
/// representable calendar date.
pub fn forecast(ledger: &[ExpenseRecord], days: u32) -> Vec<Forecast> {
    if ledger.len() < FORECAST_MIN_RECORDS || days == 0 {
        return Vec::new();
    }
    let (Some(start), Some(last)) = (
        ledger.iter().map(|r| r.date).min(),
        ledger.iter().map(|r| r.date).max(),
    ) else {
        return Vec::new();
    };

    let points: Vec<(f64, f64)> = ledger
        .iter()
        .map(|r| {
            let x = (r.date - start).num_days() as f64;
            (x, r.amount.to_f64().unwrap_or(0.0))
        })
        .collect();
    let (slope, intercept) = fit_line(&points);

    (1..=days.min(MAX_FORECAST_DAYS))
        .map_while(|i| last.checked_add_signed(TimeDelta::days(i64::from(i))))
        .map(|date| {
            let x = (date - start).num_days() as f64;
            let y = (slope * x + intercept).max(0.0);
            Forecast {
                date,
                amount: Decimal::try_from(y)
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(2),
            }
        })
        .collect()
}

// Ordinary least squares. All x equal collapses to a flat line at the mean.
fn fit_line(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return (0.0, mean_y);
    }
    let sxy: f64 = points
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();
    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_line_recovers_exact_slope() {
        let pts = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let (m, b) = fit_line(&pts);
        assert!((m - 2.0).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_line_flat_when_single_day() {
        let pts = [(0.0, 2.0), (0.0, 4.0)];
        assert_eq!(fit_line(&pts), (0.0, 3.0));
    }
}
