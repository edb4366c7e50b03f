//! `bankledger` — command-line shell over the account ledger.
//!
//! The caller side of the ledger boundary: parses decimal amounts, drives an
//! account through deposits and withdrawals, presents validation errors to the
//! user unchanged, and optionally appends session activity to a plain-text
//! audit log.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use bankledger_accounts::{Account, BankAccount, OverdraftAccount};
use bankledger_core::Money;
use bankledger_infra::audit::{AuditSink, FileAuditSink, balance_line, timestamp_line};

#[derive(Parser)]
#[command(name = "bankledger", version, about = "Minimal bank-account ledger")]
struct Cli {
    /// Append session activity to this plain-text log file.
    #[arg(long, global = true, value_name = "PATH")]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the scripted demonstration session.
    Demo {
        /// Overdraft limit; switches to the overdraft-enabled variant.
        #[arg(long, value_parser = parse_money, value_name = "AMOUNT")]
        overdraft: Option<Money>,
    },
    /// Apply a sequence of operations to a fresh account.
    Run {
        /// Opening balance.
        #[arg(long, value_parser = parse_money, value_name = "AMOUNT")]
        balance: Money,

        /// Overdraft limit; switches to the overdraft-enabled variant.
        #[arg(long, value_parser = parse_money, value_name = "AMOUNT")]
        overdraft: Option<Money>,

        /// Print the final state as JSON instead of the plain-text summary.
        #[arg(long)]
        json: bool,

        /// Operations to apply, in order, e.g. `deposit:500` `withdraw:123.45`.
        #[arg(value_parser = parse_op, required = true, value_name = "OP")]
        ops: Vec<Op>,
    },
}

/// One ledger operation, written `deposit:<amount>` or `withdraw:<amount>`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Deposit(Money),
    Withdraw(Money),
}

impl Op {
    fn apply(&self, account: &mut dyn BankAccount) -> bankledger_core::LedgerResult<()> {
        match self {
            Op::Deposit(amount) => account.deposit(*amount),
            Op::Withdraw(amount) => account.withdraw(*amount),
        }
    }

    fn describe(&self) -> String {
        match self {
            Op::Deposit(amount) => format!("deposit {amount}"),
            Op::Withdraw(amount) => format!("withdraw {amount}"),
        }
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <op>:<amount>, got `{s}`"))?;
        let amount: Money = amount.parse().map_err(|e| format!("{e}"))?;
        match kind {
            "deposit" => Ok(Op::Deposit(amount)),
            "withdraw" => Ok(Op::Withdraw(amount)),
            other => Err(format!(
                "unknown operation `{other}` (expected `deposit` or `withdraw`)"
            )),
        }
    }
}

fn parse_money(s: &str) -> Result<Money, bankledger_core::LedgerError> {
    s.parse()
}

fn parse_op(s: &str) -> Result<Op, String> {
    s.parse()
}

/// Final state printed by `run --json`.
#[derive(Serialize)]
struct SessionSummary {
    balance_cents: i64,
    balance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    overdraft_limit_cents: Option<i64>,
    applied: usize,
    rejected: usize,
}

/// Audit trail for a session; absent unless `--log` was given.
struct Audit(Option<FileAuditSink>);

impl Audit {
    fn open(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let sink = match path {
            Some(path) => {
                let mut sink = FileAuditSink::new(path);
                sink.append(&timestamp_line(Utc::now()))
                    .context("appending to audit log")?;
                Some(sink)
            }
            None => None,
        };
        Ok(Self(sink))
    }

    fn append(&mut self, line: &str) -> anyhow::Result<()> {
        if let Some(sink) = &mut self.0 {
            sink.append(line).context("appending to audit log")?;
        }
        Ok(())
    }
}

fn open_account(balance: Money, overdraft: Option<Money>) -> anyhow::Result<Box<dyn BankAccount>> {
    let account: Box<dyn BankAccount> = match overdraft {
        Some(limit) => Box::new(OverdraftAccount::new(balance, limit)?),
        None => Box::new(Account::new(balance)?),
    };
    Ok(account)
}

/// Applies one operation, reporting the outcome to the user and the audit
/// trail. A rejection is presented unchanged and leaves the balance as it was;
/// the session keeps going.
fn apply_op(account: &mut dyn BankAccount, op: &Op, audit: &mut Audit) -> anyhow::Result<bool> {
    match op.apply(account) {
        Ok(()) => {
            let line = format!("{} -> balance {}", op.describe(), account.balance());
            println!("{line}");
            audit.append(&line)?;
            Ok(true)
        }
        Err(err) => {
            let line = format!("{} rejected: {err}", op.describe());
            println!("{line}");
            audit.append(&line)?;
            Ok(false)
        }
    }
}

fn dollars(d: i64) -> Money {
    Money::from_cents(d * 100)
}

/// Scripted demonstration session: a valid deposit and withdrawal, then a
/// negative deposit, a negative withdrawal, and an over-large withdrawal to
/// show each rejection.
fn demo(overdraft: Option<Money>, audit: &mut Audit) -> anyhow::Result<()> {
    let mut account = open_account(dollars(1000), overdraft)?;
    info!(balance = %account.balance(), "account opened");

    println!("Initial balance: {}", account.balance());
    audit.append(&balance_line(account.balance()))?;

    let script = [
        Op::Deposit(dollars(500)),
        Op::Withdraw(dollars(200)),
        Op::Deposit(dollars(-100)),
        Op::Withdraw(dollars(-50)),
        Op::Withdraw(dollars(2000)),
    ];
    for op in &script {
        apply_op(account.as_mut(), op, audit)?;
    }

    println!("Your final balance is: {}", account.balance());
    audit.append(&balance_line(account.balance()))?;
    Ok(())
}

fn run(
    balance: Money,
    overdraft: Option<Money>,
    ops: &[Op],
    json: bool,
    audit: &mut Audit,
) -> anyhow::Result<()> {
    let mut account = open_account(balance, overdraft)?;
    info!(balance = %account.balance(), "account opened");

    let mut applied = 0usize;
    let mut rejected = 0usize;
    for op in ops {
        if apply_op(account.as_mut(), op, audit)? {
            applied += 1;
        } else {
            rejected += 1;
        }
    }

    audit.append(&balance_line(account.balance()))?;

    if json {
        let summary = SessionSummary {
            balance_cents: account.balance().cents(),
            balance: account.balance().to_string(),
            overdraft_limit_cents: overdraft.map(Money::cents),
            applied,
            rejected,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Your final balance is: {}", account.balance());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    bankledger_observability::init();

    let cli = Cli::parse();
    let mut audit = Audit::open(cli.log.clone())?;

    match cli.command {
        Commands::Demo { overdraft } => demo(overdraft, &mut audit),
        Commands::Run {
            balance,
            overdraft,
            json,
            ops,
        } => run(balance, overdraft, &ops, json, &mut audit),
    }
}
