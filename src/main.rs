// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pennywise::chat::ChatSession;
use pennywise::config::Config;
use pennywise::db::SqliteStore;
use pennywise::ledger::LedgerStore;
use pennywise::{cli, commands};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    // RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let config = Config::from_matches(&matches)?;
    let backend = SqliteStore::open(&config.db_path)
        .with_context(|| format!("Open ledger at {}", config.db_path.display()))?;
    let mut store = LedgerStore::with_key(backend, config.storage_key.clone());
    let mut session = ChatSession::new(config.reply_delay);

    match matches.subcommand() {
        Some(("add", sub)) => commands::expenses::handle_add(&mut store, sub)?,
        Some(("list", sub)) => commands::expenses::list(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(store.snapshot(), sub)?,
        Some(("ask", sub)) => commands::assistant::handle_ask(&store, &mut session, sub)?,
        Some(("chat", _)) => commands::assistant::chat(&store, &mut session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
