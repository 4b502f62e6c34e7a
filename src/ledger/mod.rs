//! In-memory income/expense ledger and its derived aggregates.
//!
//! Mutations never touch the aggregates. After `add_entry` or `delete_entry`
//! the values returned by [`Ledger::aggregate`] and
//! [`Ledger::expense_percentages`] describe the previous state until
//! [`Ledger::recompute_totals`] (and then
//! [`Ledger::recompute_expense_percentages`]) run again.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Entry, EntryKey, EntryKind};

/// Snapshot of the derived numbers as of the last recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    pub budget: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Expenses as a share of income; `None` while there is no income.
    pub overall_percentage: Option<u32>,
}

#[derive(Debug, Default)]
pub struct Ledger {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
    next_income_id: u64,
    next_expense_id: u64,
    totals: Aggregate,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry and return a copy with its assigned id.
    /// Callers validate description and value beforehand.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: Decimal,
    ) -> Entry {
        let next = match kind {
            EntryKind::Income => &mut self.next_income_id,
            EntryKind::Expense => &mut self.next_expense_id,
        };
        let id = *next;
        *next += 1;

        let entry = Entry::new(id, kind, description.into(), value);
        self.list_mut(kind).push(entry.clone());
        entry
    }

    /// Remove the entry with this key. Unknown keys are ignored.
    pub fn delete_entry(&mut self, kind: EntryKind, id: u64) -> Option<Entry> {
        let list = self.list_mut(kind);
        let pos = list.iter().position(|e| e.id == id)?;
        Some(list.remove(pos))
    }

    pub fn recompute_totals(&mut self) {
        let total_income = sum_values(&self.incomes);
        let total_expense = sum_values(&self.expenses);

        self.totals = Aggregate {
            budget: total_income - total_expense,
            total_income,
            total_expense,
            overall_percentage: percent_of(total_expense, total_income),
        };
    }

    /// Uses `total_income` from the last [`Ledger::recompute_totals`].
    pub fn recompute_expense_percentages(&mut self) {
        let total_income = self.totals.total_income;
        for expense in &mut self.expenses {
            expense.percentage = percent_of(expense.value, total_income);
        }
    }

    pub fn aggregate(&self) -> Aggregate {
        self.totals
    }

    /// Per-expense percentages in display order.
    pub fn expense_percentages(&self) -> Vec<Option<u32>> {
        self.expenses.iter().map(|e| e.percentage).collect()
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn get(&self, key: EntryKey) -> Option<&Entry> {
        self.entries(key.kind).iter().find(|e| e.id == key.id)
    }

    pub fn len(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

/// Total of the entry values, saturating at `Decimal::MAX`.
fn sum_values(entries: &[Entry]) -> Decimal {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.value))
        .unwrap_or_else(|| {
            tracing::warn!(entries = entries.len(), "Total overflowed, saturating");
            Decimal::MAX
        })
}

/// `round(part / whole * 100)`, half away from zero. `None` only when
/// `whole` is not positive; shares too large for `u32` saturate at
/// `u32::MAX`.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<u32> {
    if whole <= Decimal::ZERO {
        return None;
    }
    let share = part
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED));
    let Some(share) = share else {
        return Some(u32::MAX);
    };
    let rounded = share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some(rounded.max(Decimal::ZERO).to_u32().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests;
