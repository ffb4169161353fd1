// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod interpreter;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod utils;

pub use chat::ChatSession;
pub use error::{Error, Result};
pub use ledger::LedgerStore;
pub use models::{Category, ExpenseDraft, ExpenseRecord};
pub use storage::{KeyValueStore, MemoryStore};
