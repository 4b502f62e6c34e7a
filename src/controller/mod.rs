use crate::input::{EntryInput, InputError};
use crate::ledger::{Aggregate, Ledger};
use crate::models::{Entry, EntryKey};

/// One-way notifications from the controller to whatever draws the budget.
pub(crate) trait View {
    fn render_budget(&mut self, aggregate: &Aggregate);
    fn render_entry(&mut self, entry: &Entry);
    fn remove_entry(&mut self, key: EntryKey);
    /// Percentages line up positionally with the expense list.
    fn render_expense_percentages(&mut self, percentages: &[Option<u32>]);
    fn clear_input(&mut self);
}

/// Owns the ledger and runs every mutation through the full
/// mutate → recompute → render cycle.
#[derive(Debug, Default)]
pub(crate) struct Controller {
    ledger: Ledger,
}

impl Controller {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Draw the initial, empty budget.
    pub(crate) fn reset(&mut self, view: &mut dyn View) {
        self.update_budget(view);
        self.update_percentages(view);
    }

    pub(crate) fn add_item(
        &mut self,
        input: &EntryInput,
        view: &mut dyn View,
    ) -> Result<Entry, InputError> {
        let draft = input.validate().inspect_err(|e| {
            tracing::debug!(kind = %input.kind, error = %e, "Discarded entry");
        })?;

        let entry = self
            .ledger
            .add_entry(draft.kind, draft.description, draft.value);
        tracing::info!(key = %entry.key(), value = %entry.value, "Added entry");

        view.render_entry(&entry);
        view.clear_input();
        self.update_budget(view);
        self.update_percentages(view);
        Ok(entry)
    }

    /// Returns `false` (and notifies nothing) when the key is unknown.
    pub(crate) fn delete_item(&mut self, key: EntryKey, view: &mut dyn View) -> bool {
        let Some(removed) = self.ledger.delete_entry(key.kind, key.id) else {
            tracing::debug!(%key, "Delete of unknown entry ignored");
            return false;
        };
        tracing::info!(%key, description = %removed.description, "Deleted entry");

        view.remove_entry(key);
        self.update_budget(view);
        self.update_percentages(view);
        true
    }

    pub(crate) fn update_budget(&mut self, view: &mut dyn View) {
        self.ledger.recompute_totals();
        view.render_budget(&self.ledger.aggregate());
    }

    pub(crate) fn update_percentages(&mut self, view: &mut dyn View) {
        self.ledger.recompute_expense_percentages();
        view.render_expense_percentages(&self.ledger.expense_percentages());
    }
}
