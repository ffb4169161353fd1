// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pennywise::db::SqliteStore;
use pennywise::ledger::{MAX_AMOUNT, STORAGE_KEY};
use pennywise::{Category, Error, ExpenseDraft, KeyValueStore, LedgerStore, MemoryStore};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn draft(date: &str, category: &str, amount: &str, desc: &str) -> ExpenseDraft {
    ExpenseDraft::new(date, category, amount, desc)
}

fn seeded() -> LedgerStore<MemoryStore> {
    let mut store = LedgerStore::open(MemoryStore::new());
    store.append(&draft("2024-01-03", "Food", "10.00", "groceries")).unwrap();
    store.append(&draft("2024-01-01", "Transport", "5", "")).unwrap();
    store.append(&draft("2024-01-02", "bills", "0.1", "power")).unwrap();
    store
}

#[test]
fn fresh_store_is_empty() {
    let store = LedgerStore::open(MemoryStore::new());
    assert!(store.is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips_in_order() {
    let store = seeded();
    let before = store.snapshot().to_vec();
    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.snapshot(), before.as_slice());
    assert_eq!(reopened.snapshot()[2].amount, Decimal::new(1, 1));
    assert_eq!(reopened.snapshot()[2].category, Category::Bills);
}

#[test]
fn load_twice_yields_identical_ledgers() {
    let store = seeded();
    assert_eq!(store.load(), store.load());
}

#[test]
fn blob_is_a_plain_json_array() {
    let store = seeded();
    let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["category"], "Food");
    assert_eq!(arr[0]["amount"], 10.0);
    assert_eq!(arr[0]["description"], "groceries");
    assert_eq!(arr[1]["date"], "2024-01-01");
    assert!(arr[0]["id"].is_i64());
}

#[test]
fn empty_or_garbage_amount_leaves_ledger_untouched() {
    let mut store = seeded();
    let before = store.snapshot().to_vec();
    let blob = store.backend().get(STORAGE_KEY).unwrap();
    for bad in ["", "  ", "twelve", "0", "-3"] {
        let out = store.append(&draft("2024-01-05", "Food", bad, "x")).unwrap();
        assert!(out.is_none(), "amount {:?} should be rejected", bad);
    }
    assert_eq!(store.snapshot(), before.as_slice());
    assert_eq!(store.backend().get(STORAGE_KEY).unwrap(), blob);
}

#[test]
fn unknown_category_is_an_error() {
    let mut store = LedgerStore::open(MemoryStore::new());
    let err = store
        .append(&draft("2024-01-01", "Groceries", "3", ""))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(ref c) if c == "Groceries"));
    assert!(store.is_empty());
}

#[test]
fn invalid_date_is_an_error() {
    let mut store = LedgerStore::open(MemoryStore::new());
    let err = store.append(&draft("01/02/2024", "Food", "3", "")).unwrap_err();
    assert!(matches!(err, Error::InvalidDate(_)));
    assert!(store.is_empty());
}

#[test]
fn corrupt_blob_loads_as_empty() {
    for raw in [
        "not json",
        r#"{"id":1}"#,
        r#"[{"id":1,"date":"2024-01-01","category":"Groceries","amount":3}]"#,
        r#"[{"id":"x","date":"2024-01-01","category":"Food","amount":3}]"#,
    ] {
        let store = LedgerStore::open(MemoryStore::with_entry(STORAGE_KEY, raw));
        assert!(store.is_empty(), "blob {:?} should load empty", raw);
    }
}

#[test]
fn append_after_corrupt_blob_overwrites_it() {
    let mut store = LedgerStore::open(MemoryStore::with_entry(STORAGE_KEY, "{{{"));
    store.append(&draft("2024-01-01", "Other", "1.25", "")).unwrap();
    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.snapshot()[0].amount, Decimal::new(125, 2));
}

#[test]
fn custom_key_keeps_ledgers_apart() {
    let mut a = LedgerStore::with_key(MemoryStore::new(), "a");
    a.append(&draft("2024-01-01", "Food", "1", "")).unwrap();
    let backend = a.into_backend();
    let b = LedgerStore::with_key(backend, "b");
    assert!(b.is_empty());
    assert!(b.backend().get("a").unwrap().is_some());
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("ledger.sqlite");
    {
        let mut store = LedgerStore::open(SqliteStore::open(&path).unwrap());
        store.append(&draft("2024-03-01", "Entertainment", "20", "cinema")).unwrap();
        store.append(&draft("2024-03-02", "Food", "7.5", "")).unwrap();
    }
    let store = LedgerStore::open(SqliteStore::open(&path).unwrap());
    assert_eq!(store.len(), 2);
    assert_eq!(store.snapshot()[0].description, "cinema");
    assert_eq!(store.snapshot()[1].category, Category::Food);
}

#[test]
fn high_precision_amount_survives_reload() {
    let mut store = LedgerStore::open(MemoryStore::new());
    store
        .append(&draft("2024-01-01", "Food", "1.234567890123456789", ""))
        .unwrap()
        .expect("amount accepted");
    store.append(&draft("2024-01-02", "Other", "0.1", "")).unwrap();
    let before = store.snapshot().to_vec();
    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.snapshot(), before.as_slice());
}

#[test]
fn amounts_above_cap_are_rejected_and_ledger_survives() {
    let mut store = LedgerStore::open(MemoryStore::new());
    store.append(&draft("2024-01-01", "Food", "10", "")).unwrap();
    for huge in ["79228162514264337593543950335", "5e28", "1000000000000.01"] {
        assert!(store.append(&draft("2024-01-02", "Bills", huge, "")).unwrap().is_none());
    }
    let cap = store
        .append(&draft("2024-01-03", "Bills", "1000000000000", ""))
        .unwrap()
        .expect("cap itself is accepted");
    assert_eq!(cap.amount, MAX_AMOUNT);

    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.snapshot()[1].amount, MAX_AMOUNT);
}

#[test]
fn tiny_amount_round_trips() {
    let mut store = LedgerStore::open(MemoryStore::new());
    store.append(&draft("2024-01-01", "Food", "0.000001", "")).unwrap().unwrap();
    let before = store.snapshot().to_vec();
    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.snapshot(), before.as_slice());
    assert_eq!(reopened.snapshot()[0].amount, Decimal::new(1, 6));
}

#[test]
fn description_is_stored_verbatim() {
    let mut store = LedgerStore::open(MemoryStore::new());
    store
        .append(&draft("2024-01-01", "Food", "3", "  lunch with  Sam "))
        .unwrap();
    let reopened = LedgerStore::open(store.into_backend());
    assert_eq!(reopened.snapshot()[0].description, "  lunch with  Sam ");
}
