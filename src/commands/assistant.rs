// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Result;

use crate::chat::ChatSession;
use crate::ledger::LedgerStore;
use crate::models::{ChatRole, ChatTurn};
use crate::storage::KeyValueStore;

fn render(turn: &ChatTurn) -> String {
    let tag = match turn.role {
        ChatRole::User => "USR",
        ChatRole::Assistant => "SYS",
    };
    format!("[{}] {}", tag, turn.content)
}

/// Submit `query` and wait out the reply delay. Returns the assistant's answer,
/// or `None` for an empty query.
pub fn ask<S: KeyValueStore>(
    store: &LedgerStore<S>,
    session: &mut ChatSession,
    query: &str,
) -> Option<String> {
    if !session.submit(query) {
        return None;
    }
    while let Some(wait) = session.time_until_next_reply() {
        thread::sleep(wait);
        session.advance(wait, store.snapshot());
    }
    session.last_turn().map(|t| t.content.clone())
}

pub fn handle_ask<S: KeyValueStore>(
    store: &LedgerStore<S>,
    session: &mut ChatSession,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let query = sub
        .get_many::<String>("query")
        .map(|vals| vals.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if let Some(answer) = ask(store, session, &query) {
        println!("{}", answer);
    }
    Ok(())
}

pub fn chat<S: KeyValueStore>(store: &LedgerStore<S>, session: &mut ChatSession) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    for turn in session.history() {
        writeln!(out, "{}", render(turn))?;
    }
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if matches!(line, "exit" | "quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        writeln!(out, ":: Processing...")?;
        if let Some(answer) = ask(store, session, line) {
            writeln!(out, "[SYS] {}", answer)?;
        }
    }
    Ok(())
}
