use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode};
use crate::input::EntryInput;
use crate::models::{EntryKey, EntryKind};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Budgety", cmd_quit, r);
    register_command!("quit", "Quit Budgety", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add entry (e.g. :add exp Rent 300)",
        cmd_add,
        r
    );
    register_command!("a", "Add entry (e.g. :add exp Rent 300)", cmd_add, r);
    register_command!(
        "delete",
        "Delete entry (e.g. :delete exp-0, default: selected)",
        cmd_delete,
        r
    );
    register_command!(
        "del",
        "Delete entry (e.g. :delete exp-0, default: selected)",
        cmd_delete,
        r
    );
    register_command!("income", "Focus the income list", cmd_focus_income, r);
    register_command!("inc", "Focus the income list", cmd_focus_income, r);
    register_command!("expenses", "Focus the expense list", cmd_focus_expense, r);
    register_command!("exp", "Focus the expense list", cmd_focus_expense, r);
    register_command!("new", "Open the entry form", cmd_new, r);
    register_command!("n", "Open the entry form", cmd_new, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, args, "Running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `<kind> <description...> <value>`. The description may contain
/// spaces; the value is the last word.
pub(crate) fn parse_add_args(args: &str) -> Option<EntryInput> {
    let (kind, rest) = args.trim().split_once(' ')?;
    let kind = kind.parse::<EntryKind>().ok()?;
    let (description, value) = rest.trim().rsplit_once(' ')?;
    Some(EntryInput::new(kind, description.trim(), value))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(input) = parse_add_args(args) else {
        app.set_status("Usage: :add <inc|exp> <description> <value>");
        return Ok(());
    };
    // Rejected values leave the budget untouched, same as the form
    let _ = app.add_entry(&input);
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.request_delete_selected();
        return Ok(());
    }
    match args.parse::<EntryKey>() {
        // Unknown keys are a no-op
        Ok(key) => {
            app.delete_entry(key);
        }
        Err(e) => app.set_status(e),
    }
    Ok(())
}

fn cmd_focus_income(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = EntryKind::Income;
    Ok(())
}

fn cmd_focus_expense(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = EntryKind::Expense;
    Ok(())
}

fn cmd_new(args: &str, app: &mut App) -> anyhow::Result<()> {
    if let Ok(kind) = args.parse::<EntryKind>() {
        app.board.form.kind = kind;
    }
    app.input_mode = InputMode::Form;
    Ok(())
}
