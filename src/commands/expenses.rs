// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::models::{ExpenseDraft, ExpenseRecord};
use crate::storage::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle_add<S: KeyValueStore>(store: &mut LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(rec) = add(store, sub)? {
        println!(
            "Recorded {} to {} on {}",
            fmt_money(&rec.amount),
            rec.category,
            rec.date
        );
    }
    Ok(())
}

/// Append the expense described by `sub`. `None` when the amount was rejected.
pub fn add<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Option<ExpenseRecord>> {
    let arg = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    let draft = ExpenseDraft::new(arg("date"), arg("category"), arg("amount"), arg("note"));
    Ok(store.append(&draft)?)
}

pub fn list<S: KeyValueStore>(store: &LedgerStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.snapshot();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.to_string(),
                    r.category.to_string(),
                    format!("{:.2}", r.amount),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Category", "Amount", "Description"], rows)
        );
    }
    Ok(())
}
