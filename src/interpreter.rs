// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword-driven answers to questions about the ledger.

use crate::analytics::grand_total;
use crate::models::ExpenseRecord;
use crate::utils::fmt_money;

pub const GREETING: &str = "Greetings. I am running in Offline Mode.";
pub const FALLBACK: &str =
    "Data stored locally. I cannot process complex queries without a backend.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Total,
    Greeting,
    Unknown,
}

// Checked in order, first containment match wins.
const TRIGGERS: &[(&str, Intent)] = &[("total", Intent::Total), ("hello", Intent::Greeting)];

pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(kw, _)| q.contains(kw))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Unknown)
}

pub fn respond(query: &str, ledger: &[ExpenseRecord]) -> String {
    match classify(query) {
        Intent::Total => format!(
            "Total spending currently logged is {}.",
            fmt_money(&grand_total(ledger))
        ),
        Intent::Greeting => GREETING.to_string(),
        Intent::Unknown => FALLBACK.to_string(),
    }
}
