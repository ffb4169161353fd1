// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::chat::DEFAULT_REPLY_DELAY;
use crate::db::default_db_path;
use crate::ledger::STORAGE_KEY;

/// Runtime settings resolved from the global CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub reply_delay: Duration,
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<String>("db") {
            Some(p) => PathBuf::from(p),
            None => default_db_path().context("Resolve default database path")?,
        };
        let storage_key = m
            .get_one::<String>("key")
            .cloned()
            .unwrap_or_else(|| STORAGE_KEY.to_string());
        let reply_delay = m
            .get_one::<u64>("reply-delay-ms")
            .map(|ms| Duration::from_millis(*ms))
            .unwrap_or(DEFAULT_REPLY_DELAY);
        Ok(Self {
            db_path,
            storage_key,
            reply_delay,
        })
    }
}
