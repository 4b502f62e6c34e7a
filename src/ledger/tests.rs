#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn recompute(ledger: &mut Ledger) {
    ledger.recompute_totals();
    ledger.recompute_expense_percentages();
}

// ── Ids ───────────────────────────────────────────────────────

#[test]
fn test_ids_start_at_zero_per_kind() {
    let mut ledger = Ledger::new();
    let inc = ledger.add_entry(EntryKind::Income, "Salary", dec!(1000));
    let exp = ledger.add_entry(EntryKind::Expense, "Rent", dec!(300));
    let exp2 = ledger.add_entry(EntryKind::Expense, "Food", dec!(200));
    assert_eq!(inc.id, 0);
    assert_eq!(exp.id, 0);
    assert_eq!(exp2.id, 1);
}

#[test]
fn test_ids_not_reused_after_deleting_last() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "A", dec!(1));
    ledger.add_entry(EntryKind::Expense, "B", dec!(1));
    assert!(ledger.delete_entry(EntryKind::Expense, 1).is_some());

    let c = ledger.add_entry(EntryKind::Expense, "C", dec!(1));
    assert_eq!(c.id, 2);
}

#[test]
fn test_ids_not_reused_after_emptying_kind() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "A", dec!(1));
    ledger.delete_entry(EntryKind::Income, 0);
    assert!(ledger.entries(EntryKind::Income).is_empty());

    let b = ledger.add_entry(EntryKind::Income, "B", dec!(1));
    assert_eq!(b.id, 1);
}

#[test]
fn test_ids_monotonic_with_interleaved_deletes() {
    let mut ledger = Ledger::new();
    let mut highest: Option<u64> = None;
    for round in 0..10u64 {
        let entry = ledger.add_entry(EntryKind::Expense, "x", dec!(5));
        assert_eq!(entry.id, highest.map_or(0, |h| h + 1));
        highest = Some(entry.id);
        if round % 3 == 0 {
            ledger.delete_entry(EntryKind::Expense, entry.id);
        }
    }
    // Incomes were never touched
    assert_eq!(ledger.add_entry(EntryKind::Income, "y", dec!(1)).id, 0);
}

#[test]
fn test_add_returns_entry_with_pending_percentage() {
    let mut ledger = Ledger::new();
    let entry = ledger.add_entry(EntryKind::Expense, "Rent", dec!(300));
    assert_eq!(entry.description, "Rent");
    assert_eq!(entry.value, dec!(300));
    assert_eq!(entry.kind, EntryKind::Expense);
    assert!(entry.percentage.is_none());
    assert_eq!(ledger.get(entry.key()), Some(&entry));
}

#[test]
fn test_insertion_order_is_display_order() {
    let mut ledger = Ledger::new();
    for name in ["one", "two", "three"] {
        ledger.add_entry(EntryKind::Income, name, dec!(1));
    }
    ledger.delete_entry(EntryKind::Income, 1);
    let names: Vec<&str> = ledger
        .entries(EntryKind::Income)
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(names, ["one", "three"]);
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_new_ledger_is_empty_with_zero_totals() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.len(), 0);
    let agg = ledger.aggregate();
    assert_eq!(agg.budget, Decimal::ZERO);
    assert_eq!(agg.total_income, Decimal::ZERO);
    assert_eq!(agg.total_expense, Decimal::ZERO);
    assert_eq!(agg.overall_percentage, None);
}

#[test]
fn test_totals_sum_each_kind() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(1000.50));
    ledger.add_entry(EntryKind::Income, "Bonus", dec!(99.50));
    ledger.add_entry(EntryKind::Expense, "Rent", dec!(300.25));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(0.75));
    ledger.recompute_totals();

    let agg = ledger.aggregate();
    assert_eq!(agg.total_income, dec!(1100));
    assert_eq!(agg.total_expense, dec!(301));
    assert_eq!(agg.budget, dec!(799));
    assert_eq!(agg.overall_percentage, Some(27));
}

#[test]
fn test_budget_can_go_negative() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(100));
    ledger.add_entry(EntryKind::Expense, "Car", dec!(250));
    recompute(&mut ledger);

    let agg = ledger.aggregate();
    assert_eq!(agg.budget, dec!(-150));
    assert_eq!(agg.overall_percentage, Some(250));
    assert_eq!(ledger.expense_percentages(), vec![Some(250)]);
}

#[test]
fn test_aggregates_stale_until_recompute() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(1000));
    assert_eq!(ledger.aggregate().total_income, Decimal::ZERO);

    ledger.recompute_totals();
    assert_eq!(ledger.aggregate().total_income, dec!(1000));

    ledger.delete_entry(EntryKind::Income, 0);
    assert_eq!(ledger.aggregate().total_income, dec!(1000));
    ledger.recompute_totals();
    assert_eq!(ledger.aggregate().total_income, Decimal::ZERO);
}

#[test]
fn test_expense_percentages_stale_until_recompute() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(200));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    // Percentages computed against the stale (zero) income
    ledger.recompute_expense_percentages();
    assert_eq!(ledger.expense_percentages(), vec![None]);

    recompute(&mut ledger);
    assert_eq!(ledger.expense_percentages(), vec![Some(25)]);
}

// ── Percentages ───────────────────────────────────────────────

#[test]
fn test_zero_income_gives_undefined_percentages() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "Rent", dec!(300));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(200));
    recompute(&mut ledger);

    assert_eq!(ledger.aggregate().overall_percentage, None);
    assert_eq!(ledger.expense_percentages(), vec![None, None]);
    assert_eq!(ledger.aggregate().budget, dec!(-500));
}

#[test]
fn test_percentages_reset_when_income_removed() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(200));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    recompute(&mut ledger);
    assert_eq!(ledger.expense_percentages(), vec![Some(25)]);

    ledger.delete_entry(EntryKind::Income, 0);
    recompute(&mut ledger);
    assert_eq!(ledger.expense_percentages(), vec![None]);
}

#[test]
fn test_rounding_exact_quarter() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(200));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    recompute(&mut ledger);
    assert_eq!(ledger.expense_percentages(), vec![Some(25)]);
}

#[test]
fn test_rounding_repeating_fraction() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(300));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    recompute(&mut ledger);
    assert_eq!(ledger.expense_percentages(), vec![Some(17)]);
    assert_eq!(ledger.aggregate().overall_percentage, Some(17));
}

#[test]
fn test_rounding_half_goes_up() {
    assert_eq!(percent_of(dec!(1), dec!(8)), Some(13)); // 12.5
    assert_eq!(percent_of(dec!(5), dec!(200)), Some(3)); // 2.5
    assert_eq!(percent_of(dec!(1), dec!(3)), Some(33));
}

#[test]
fn test_percent_of_non_positive_whole() {
    assert_eq!(percent_of(dec!(10), Decimal::ZERO), None);
    assert_eq!(percent_of(dec!(10), dec!(-5)), None);
}

#[test]
fn test_percent_of_huge_share_saturates() {
    assert_eq!(percent_of(dec!(1000000), dec!(0.00001)), Some(u32::MAX));
    assert_eq!(percent_of(Decimal::MAX, dec!(0.0000001)), Some(u32::MAX));
}

#[test]
fn test_tiny_income_keeps_percentages_defined() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Interest", dec!(0.01));
    ledger.add_entry(EntryKind::Expense, "Car", dec!(1000000000));
    recompute(&mut ledger);
    assert_eq!(ledger.aggregate().overall_percentage, Some(u32::MAX));
    assert_eq!(ledger.expense_percentages(), vec![Some(u32::MAX)]);
}

#[test]
fn test_totals_saturate_instead_of_overflowing() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "A", Decimal::MAX);
    ledger.add_entry(EntryKind::Income, "B", Decimal::MAX);
    ledger.add_entry(EntryKind::Expense, "C", Decimal::MAX);
    recompute(&mut ledger);

    let agg = ledger.aggregate();
    assert_eq!(agg.total_income, Decimal::MAX);
    assert_eq!(agg.total_expense, Decimal::MAX);
    assert_eq!(agg.budget, Decimal::ZERO);
    assert_eq!(agg.overall_percentage, Some(100));
}

#[test]
fn test_income_entries_never_get_percentages() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(200));
    recompute(&mut ledger);
    assert!(ledger.entries(EntryKind::Income)[0].percentage.is_none());
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", dec!(200));
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    recompute(&mut ledger);
    let before_agg = ledger.aggregate();
    let before_pcts = ledger.expense_percentages();

    assert!(ledger.delete_entry(EntryKind::Expense, 42).is_none());
    // Same id, wrong kind
    assert!(ledger.delete_entry(EntryKind::Income, 1).is_none());
    recompute(&mut ledger);

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.aggregate(), before_agg);
    assert_eq!(ledger.expense_percentages(), before_pcts);
}

#[test]
fn test_delete_twice_is_idempotent() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "Food", dec!(50));
    assert!(ledger.delete_entry(EntryKind::Expense, 0).is_some());
    assert!(ledger.delete_entry(EntryKind::Expense, 0).is_none());
    assert!(ledger.is_empty());
}

#[test]
fn test_delete_returns_removed_entry() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "Rent", dec!(300));
    let removed = ledger.delete_entry(EntryKind::Expense, 0).unwrap();
    assert_eq!(removed.description, "Rent");
    assert_eq!(removed.value, dec!(300));
}

// ── End to end ────────────────────────────────────────────────

#[test]
fn test_salary_rent_food_scenario() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.add_entry(EntryKind::Income, "Salary", dec!(1000)).id, 0);
    assert_eq!(ledger.add_entry(EntryKind::Expense, "Rent", dec!(300)).id, 0);
    assert_eq!(ledger.add_entry(EntryKind::Expense, "Food", dec!(200)).id, 1);

    ledger.recompute_totals();
    let agg = ledger.aggregate();
    assert_eq!(agg.total_income, dec!(1000));
    assert_eq!(agg.total_expense, dec!(500));
    assert_eq!(agg.budget, dec!(500));
    assert_eq!(agg.overall_percentage, Some(50));

    ledger.recompute_expense_percentages();
    assert_eq!(ledger.expense_percentages(), vec![Some(30), Some(20)]);

    ledger.delete_entry(EntryKind::Expense, 0);
    ledger.recompute_totals();
    let agg = ledger.aggregate();
    assert_eq!(agg.total_expense, dec!(200));
    assert_eq!(agg.budget, dec!(800));
    assert_eq!(agg.overall_percentage, Some(20));
}
