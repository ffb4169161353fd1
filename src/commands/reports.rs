// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    category_totals, daily_totals, forecast, grand_total, monthly_totals, time_series,
    weekly_totals, DEFAULT_FORECAST_DAYS, FORECAST_MIN_RECORDS,
};
use crate::models::{ExpenseRecord, PeriodTotal};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::RoundingStrategy;
use serde_json::json;

pub fn handle(ledger: &[ExpenseRecord], m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(ledger, sub)?,
        Some(("total", sub)) => total(ledger, sub)?,
        Some(("series", sub)) => series(ledger, sub)?,
        Some(("daily", sub)) => periods(&daily_totals(ledger), "Day", sub)?,
        Some(("weekly", sub)) => periods(&weekly_totals(ledger), "Week", sub)?,
        Some(("monthly", sub)) => periods(&monthly_totals(ledger), "Month", sub)?,
        Some(("forecast", sub)) => predict(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(ledger: &[ExpenseRecord], sub: &clap::ArgMatches) -> Result<()> {
    let data = category_totals(ledger);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|a| vec![a.category.to_string(), format!("{:.2}", a.amount)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn total(ledger: &[ExpenseRecord], sub: &clap::ArgMatches) -> Result<()> {
    let t = grand_total(ledger);
    let v = json!({ "total": t.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero), "count": ledger.len() });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)? {
        println!("Total spent: {} across {} expenses", fmt_money(&t), ledger.len());
    }
    Ok(())
}

fn series(ledger: &[ExpenseRecord], sub: &clap::ArgMatches) -> Result<()> {
    let data = time_series(ledger);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|p| vec![p.date.to_string(), format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&["Date", "Amount"], rows));
    }
    Ok(())
}

fn periods(data: &[PeriodTotal], label: &str, sub: &clap::ArgMatches) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|p| vec![p.period.clone(), format!("{:.2}", p.amount)])
            .collect();
        println!("{}", pretty_table(&[label, "Spent"], rows));
    }
    Ok(())
}

fn predict(ledger: &[ExpenseRecord], sub: &clap::ArgMatches) -> Result<()> {
    let days = sub
        .get_one::<u32>("days")
        .copied()
        .unwrap_or(DEFAULT_FORECAST_DAYS);
    if ledger.len() < FORECAST_MIN_RECORDS {
        println!(
            "Add at least {} expenses to enable forecasts ({} so far).",
            FORECAST_MIN_RECORDS,
            ledger.len()
        );
        return Ok(());
    }
    let data = forecast(ledger, days);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|f| vec![f.date.to_string(), format!("{:.2}", f.amount)])
            .collect();
        println!("{}", pretty_table(&["Date", "Predicted"], rows));
    }
    Ok(())
}
