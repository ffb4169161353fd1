// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The single authoritative ledger for a session and its persisted copy.
//!
//! The store owns the in-memory records and is the only writer of the blob
//! under its key. Every successful append is followed by a synchronous full
//! overwrite, so the blob always matches the last successful mutation.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{
    amount_from_f64, amount_to_f64, Category, ExpenseDraft, ExpenseRecord, Ledger,
};
use crate::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "penny_wise_expenses";

/// Largest single amount accepted on append. Keeps every stored amount
/// exactly reloadable and ledger sums far from `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

pub struct LedgerStore<S: KeyValueStore> {
    backend: S,
    key: String,
    records: Ledger,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Create a store over `backend` and load whatever it holds under the default key.
    pub fn open(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            records: Vec::new(),
        };
        store.records = store.load();
        store
    }

    /// Read the persisted ledger. Missing or unreadable blobs yield an empty ledger.
    pub fn load(&self) -> Ledger {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read ledger '{}': {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Ledger>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Persisted ledger '{}' is corrupt, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted blob with the full in-memory ledger.
    pub fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.backend.set(&self.key, &blob)
    }

    /// Validate `draft`, append it with a fresh id and persist.
    ///
    /// Returns `Ok(None)` without touching the ledger when the amount is empty,
    /// unparsable, not positive or above [`MAX_AMOUNT`]. Out-of-set categories
    /// and bad dates are errors. The description is kept verbatim.
    pub fn append(&mut self, draft: &ExpenseDraft) -> Result<Option<ExpenseRecord>> {
        let Some(amount) = parse_amount(&draft.amount) else {
            debug!("Ignoring expense with amount '{}'", draft.amount);
            return Ok(None);
        };
        let category: Category = draft.category.parse()?;
        let date = NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(draft.date.clone()))?;

        let record = ExpenseRecord {
            id: self.next_id(),
            date,
            category,
            amount,
            description: draft.description.clone(),
        };
        self.records.push(record.clone());
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        debug!("Recorded expense {} ({} {})", record.id, record.category, record.amount);
        Ok(Some(record))
    }

    /// Current in-memory ledger in insertion order.
    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    // Millisecond timestamps, bumped past the last id when two appends share a tick.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.records.iter().map(|r| r.id).max() {
            Some(last) if last >= now => last + 1,
            _ => now,
        }
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let parsed = s
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(s))
        .ok()?;
    if parsed > MAX_AMOUNT {
        return None;
    }
    // Store exactly what the blob will hand back on reload.
    let amount = amount_to_f64(&parsed).and_then(amount_from_f64)?;
    (amount > Decimal::ZERO).then_some(amount)
}
