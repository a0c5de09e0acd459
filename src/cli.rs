// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(crate_version!())
        .about("Personal expense dashboard: track, control, analyze your spending")
        .subcommand(
            Command::new("dashboard")
                .about("Render KPIs, spend charts, and the transaction table")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .value_name("CSV")
                        .default_value("expenses.csv")
                        .help("Expense CSV with date, description, amount columns"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the summary as pretty JSON instead of tables"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Emit the sorted transactions as JSON lines"),
                ),
        )
}
