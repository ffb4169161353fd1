// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

use crate::analytics::MAX_FORECAST_DAYS;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pennywise")
        .version(crate_version!())
        .about("Local expense ledger with category analytics and an offline assistant")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("SQLite file holding the ledger (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .global(true)
                .help("Storage key the ledger is persisted under"),
        )
        .arg(
            Arg::new("reply-delay-ms")
                .long("reply-delay-ms")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Pause before the assistant answers, in milliseconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("amount").long("amount").required(true).allow_hyphen_values(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("Food")
                        .help("Food, Transport, Bills, Entertainment or Other"),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(json_args(Command::new("list").about("List recorded expenses")))
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(json_args(
                    Command::new("categories").about("Totals per category, first-seen order"),
                ))
                .subcommand(json_args(Command::new("total").about("Grand total")))
                .subcommand(json_args(
                    Command::new("series").about("Amounts in insertion order"),
                ))
                .subcommand(json_args(Command::new("daily").about("Totals per day")))
                .subcommand(json_args(Command::new("weekly").about("Totals per ISO week")))
                .subcommand(json_args(Command::new("monthly").about("Totals per month")))
                .subcommand(json_args(
                    Command::new("forecast")
                        .about("Projected spending for the coming days")
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .value_parser(value_parser!(u32).range(1..=i64::from(MAX_FORECAST_DAYS)))
                                .default_value("7"),
                        ),
                )),
        )
        .subcommand(
            Command::new("ask")
                .about("Ask the assistant one question")
                .arg(Arg::new("query").required(true).num_args(1..)),
        )
        .subcommand(Command::new("chat").about("Talk to the assistant interactively"))
}
