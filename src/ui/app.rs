use chrono::Local;

use crate::controller::{Controller, View};
use crate::input::{EntryInput, InputError};
use crate::ledger::Aggregate;
use crate::models::{Entry, EntryKey, EntryKind};
use crate::ui::util::{format_signed, ListCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "ADD"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Kind,
    Description,
    Value,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Kind => Self::Description,
            Self::Description => Self::Value,
            Self::Value => Self::Kind,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Value,
            Self::Description => Self::Kind,
            Self::Value => Self::Description,
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteEntry { key: EntryKey, description: String },
}

/// The add-entry form.
#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) kind: EntryKind,
    pub(crate) description: String,
    pub(crate) value: String,
    pub(crate) field: FormField,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            kind: EntryKind::Income,
            description: String::new(),
            value: String::new(),
            field: FormField::Description,
        }
    }
}

impl EntryForm {
    pub(crate) fn to_input(&self) -> EntryInput {
        EntryInput::new(self.kind, self.description.as_str(), self.value.as_str())
    }

    pub(crate) fn push(&mut self, c: char) {
        match self.field {
            FormField::Kind => match c {
                '+' => self.kind = EntryKind::Income,
                '-' => self.kind = EntryKind::Expense,
                ' ' => self.kind = self.kind.toggled(),
                _ => {}
            },
            FormField::Description => self.description.push(c),
            FormField::Value => self.value.push(c),
        }
    }

    pub(crate) fn pop(&mut self) {
        match self.field {
            FormField::Kind => {}
            FormField::Description => {
                self.description.pop();
            }
            FormField::Value => {
                self.value.pop();
            }
        }
    }
}

/// What is currently on screen. Only ever written through [`View`].
#[derive(Debug, Default)]
pub(crate) struct Board {
    pub(crate) incomes: Vec<Entry>,
    pub(crate) expenses: Vec<Entry>,
    pub(crate) aggregate: Aggregate,
    pub(crate) form: EntryForm,
}

impl Board {
    pub(crate) fn list(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }
}

impl View for Board {
    fn render_budget(&mut self, aggregate: &Aggregate) {
        self.aggregate = *aggregate;
    }

    fn render_entry(&mut self, entry: &Entry) {
        match entry.kind {
            EntryKind::Income => self.incomes.push(entry.clone()),
            EntryKind::Expense => self.expenses.push(entry.clone()),
        }
    }

    fn remove_entry(&mut self, key: EntryKey) {
        let list = match key.kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        };
        list.retain(|e| e.id != key.id);
    }

    fn render_expense_percentages(&mut self, percentages: &[Option<u32>]) {
        for (expense, pct) in self.expenses.iter_mut().zip(percentages) {
            expense.percentage = *pct;
        }
    }

    fn clear_input(&mut self) {
        self.form.description.clear();
        self.form.value.clear();
        self.form.field = FormField::Description;
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// e.g. "October 2026"
    pub(crate) period: String,

    pub(crate) controller: Controller,
    pub(crate) board: Board,

    // List selection
    pub(crate) focus: EntryKind,
    pub(crate) income_cursor: ListCursor,
    pub(crate) expense_cursor: ListCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let period = Local::now().format("%B %Y").to_string();
        let mut app = Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            period,

            controller: Controller::new(),
            board: Board::default(),

            focus: EntryKind::Income,
            income_cursor: ListCursor::default(),
            expense_cursor: ListCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.controller.reset(&mut app.board);
        app
    }

    /// Submit the form. Invalid input is dropped without a message.
    pub(crate) fn submit_form(&mut self) -> Option<Entry> {
        let input = self.board.form.to_input();
        self.add_entry(&input).ok()
    }

    pub(crate) fn add_entry(&mut self, input: &EntryInput) -> Result<Entry, InputError> {
        let entry = self.controller.add_item(input, &mut self.board)?;
        self.focus = entry.kind;
        self.goto_bottom();
        self.set_status(format!(
            "Added {}: {} {}",
            entry.key(),
            entry.description,
            format_signed(entry.value, entry.kind)
        ));
        Ok(entry)
    }

    pub(crate) fn delete_entry(&mut self, key: EntryKey) -> bool {
        let description = self
            .controller
            .ledger()
            .get(key)
            .map(|e| e.description.clone())
            .unwrap_or_default();
        if !self.controller.delete_item(key, &mut self.board) {
            return false;
        }
        self.clamp_selection();
        self.set_status(format!("Deleted {key}: {description}"));
        true
    }

    /// Ask for confirmation before deleting the selected row.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            self.set_status("Nothing selected");
            return;
        };
        let key = entry.key();
        let description = entry.description.clone();
        self.confirm_message = format!("Delete {key} '{description}'?");
        self.pending_action = Some(PendingAction::DeleteEntry { key, description });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(PendingAction::DeleteEntry { key, .. }) = self.pending_action.take() {
            self.delete_entry(key);
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    pub(crate) fn cursor(&self, kind: EntryKind) -> ListCursor {
        match kind {
            EntryKind::Income => self.income_cursor,
            EntryKind::Expense => self.expense_cursor,
        }
    }

    pub(crate) fn selected_entry(&self) -> Option<&Entry> {
        self.board
            .list(self.focus)
            .get(self.cursor(self.focus).index)
    }

    pub(crate) fn move_down(&mut self) {
        let len = self.board.list(self.focus).len();
        let page = self.list_page();
        self.cursor_mut(self.focus).down(len, page);
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor_mut(self.focus).up();
    }

    pub(crate) fn goto_top(&mut self) {
        self.cursor_mut(self.focus).top();
    }

    pub(crate) fn goto_bottom(&mut self) {
        let len = self.board.list(self.focus).len();
        let page = self.list_page();
        self.cursor_mut(self.focus).bottom(len, page);
    }

    fn clamp_selection(&mut self) {
        for kind in EntryKind::all() {
            let len = self.board.list(*kind).len();
            self.cursor_mut(*kind).clamp(len);
        }
    }

    fn cursor_mut(&mut self, kind: EntryKind) -> &mut ListCursor {
        match kind {
            EntryKind::Income => &mut self.income_cursor,
            EntryKind::Expense => &mut self.expense_cursor,
        }
    }

    /// Rows that fit inside a list block (borders take two).
    pub(crate) fn list_page(&self) -> usize {
        self.visible_rows.saturating_sub(2).max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
