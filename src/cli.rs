// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, command, value_parser};

use crate::config::{DEFAULT_BACKUP_DIR, DEFAULT_DB_FILE};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(
            arg!(--jsonl "Print as JSON lines")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

fn filter_args(cmd: Command, default_limit: &'static str) -> Command {
    cmd.arg(arg!(--from <DATE> "Earliest date, YYYY-MM-DD"))
        .arg(arg!(--to <DATE> "Latest date, YYYY-MM-DD"))
        .arg(arg!(--category <NAME> "Category name, or All"))
        .arg(arg!(--search <TEXT> "Substring of notes or category"))
        .arg(
            arg!(--limit <N> "Maximum rows")
                .value_parser(value_parser!(usize))
                .default_value(default_limit),
        )
}

pub fn build_cli() -> Command {
    command!()
        .about("Offline personal finance tracker: transactions, savings goals, monthly summary")
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .env("FINTRACK_DB")
                .default_value(DEFAULT_DB_FILE)
                .global(true)
                .help("Ledger database file"),
        )
        .arg(
            Arg::new("backup_dir")
                .long("backup-dir")
                .value_name("DIR")
                .env("FINTRACK_BACKUP_DIR")
                .default_value(DEFAULT_BACKUP_DIR)
                .global(true)
                .help("Directory that receives backups"),
        )
        .arg(
            arg!(-v --verbose "Debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the database and default categories"))
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(output_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a savings goal")
                        .arg(arg!(--name <NAME> "Goal name").required(true))
                        .arg(arg!(--target <AMOUNT> "Target amount").required(true))
                        .arg(arg!(--deadline <DATE> "Optional deadline, YYYY-MM-DD")),
                )
                .subcommand(output_flags(
                    Command::new("list").about("List goals with progress"),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(arg!(--date <DATE> "Date, YYYY-MM-DD (default today)"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("Income or Expense")
                                .value_parser(["Income", "Expense"])
                                .ignore_case(true)
                                .default_value("Expense"),
                        )
                        .arg(arg!(--category <NAME> "Category").required(true))
                        .arg(arg!(--amount <AMOUNT> "Positive amount").required(true))
                        .arg(arg!(--notes <TEXT> "Free-form notes"))
                        .arg(arg!(--goal <NAME> "Apply to this goal")),
                )
                .subcommand(output_flags(filter_args(
                    Command::new("list").about("List and filter transactions"),
                    "2000",
                )))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(
                            Arg::new("id")
                                .value_name("ID")
                                .required(true)
                                .help("Transaction id")
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(output_flags(
            Command::new("summary")
                .about("Income, expense and balance for a month")
                .arg(arg!(--month <MONTH> "YYYY-MM (default current month)")),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                filter_args(
                    Command::new("csv").about("Export filtered transactions to CSV"),
                    "10000",
                )
                .arg(arg!(--out <PATH> "Output file (default timestamped name)")),
            ),
        )
        .subcommand(Command::new("backup").about("Copy the database into the backup directory"))
}
