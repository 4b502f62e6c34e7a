use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::ledger::Ledger;
use crate::models::EntryKind;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::util::{format_budget, format_percentage, format_signed};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "batch" | "b" => cli_batch(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgety {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Budgety — in-memory monthly budget");
    println!();
    println!("Usage: budgety [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  batch [file]                  Run budget commands from a file (or stdin)");
    println!("                                and print the resulting budget");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Batch commands (one per line, # starts a comment):");
    println!("  add <inc|exp> <description> <value>");
    println!("  delete <inc|exp>-<id>");
    println!();
    println!("Set BUDGETY_LOG=debug to write a log file to the data directory.");
}

fn cli_batch(args: &[String]) -> Result<()> {
    let app = match args.first().filter(|a| a.as_str() != "-") {
        Some(file_path) => {
            let path = Path::new(file_path);
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open batch file: {}", path.display()))?;
            run_batch(BufReader::new(file), &mut std::io::stderr())?
        }
        None => run_batch(std::io::stdin().lock(), &mut std::io::stderr())?,
    };

    let mut stdout = std::io::stdout().lock();
    write_summary(&mut stdout, app.controller.ledger(), &app.period)?;
    Ok(())
}

/// Apply each line as a command to a fresh budget. Status messages are
/// echoed to `log` with their line number.
pub(crate) fn run_batch(reader: impl BufRead, log: &mut impl Write) -> Result<App> {
    let mut app = App::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read batch input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = trimmed.strip_prefix(':').unwrap_or(trimmed);

        app.status_message.clear();
        commands::handle_command(command, &mut app)?;
        if app.input_mode == InputMode::Confirm {
            // Nothing is selected in a batch
            app.cancel_pending();
        }
        app.input_mode = InputMode::Normal;
        app.show_help = false;

        if !app.status_message.is_empty() {
            writeln!(log, "line {}: {}", n + 1, app.status_message)?;
        }
        if !app.running {
            break;
        }
    }

    tracing::info!(entries = app.controller.ledger().len(), "Batch finished");
    Ok(app)
}

pub(crate) fn write_summary(out: &mut impl Write, ledger: &Ledger, period: &str) -> Result<()> {
    let agg = ledger.aggregate();

    writeln!(out, "Budgety — {period}")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Budget:     {}", format_budget(agg.budget))?;
    writeln!(
        out,
        "  Income:     {}",
        format_signed(agg.total_income, EntryKind::Income)
    )?;
    writeln!(
        out,
        "  Expenses:   {}  ({})",
        format_signed(agg.total_expense, EntryKind::Expense),
        format_percentage(agg.overall_percentage)
    )?;

    for kind in EntryKind::all() {
        let entries = ledger.entries(*kind);
        if entries.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}:", kind.label())?;
        for entry in entries {
            let pct = if entry.is_expense() {
                format!("  {:>4}", format_percentage(entry.percentage))
            } else {
                String::new()
            };
            writeln!(
                out,
                "  {:<8} {:<24} {:>14}{pct}",
                entry.key().to_string(),
                entry.description,
                format_signed(entry.value, entry.kind)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
