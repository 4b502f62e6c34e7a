#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── EntryKind ─────────────────────────────────────────────────

#[test]
fn test_entry_kind_parse() {
    assert_eq!("inc".parse::<EntryKind>().unwrap(), EntryKind::Income);
    assert_eq!("INCOME".parse::<EntryKind>().unwrap(), EntryKind::Income);
    assert_eq!("+".parse::<EntryKind>().unwrap(), EntryKind::Income);
    assert_eq!("exp".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    assert_eq!("Expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    assert_eq!("-".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    assert!("savings".parse::<EntryKind>().is_err());
}

#[test]
fn test_entry_kind_roundtrip() {
    for kind in EntryKind::all() {
        let back: EntryKind = kind.as_str().parse().unwrap();
        assert_eq!(*kind, back, "Roundtrip failed for {kind}");
    }
}

#[test]
fn test_entry_kind_toggle_and_sign() {
    assert_eq!(EntryKind::Income.toggled(), EntryKind::Expense);
    assert_eq!(EntryKind::Expense.toggled(), EntryKind::Income);
    assert_eq!(EntryKind::Income.sign(), '+');
    assert_eq!(EntryKind::Expense.sign(), '-');
}

// ── EntryKey ──────────────────────────────────────────────────

#[test]
fn test_entry_key_parse() {
    let key: EntryKey = "exp-12".parse().unwrap();
    assert_eq!(key, EntryKey::new(EntryKind::Expense, 12));

    let key: EntryKey = " inc-0 ".parse().unwrap();
    assert_eq!(key, EntryKey::new(EntryKind::Income, 0));
}

#[test]
fn test_entry_key_parse_rejects_garbage() {
    assert!("exp".parse::<EntryKey>().is_err());
    assert!("exp-".parse::<EntryKey>().is_err());
    assert!("exp-x".parse::<EntryKey>().is_err());
    assert!("foo-1".parse::<EntryKey>().is_err());
    assert!("exp--1".parse::<EntryKey>().is_err());
}

#[test]
fn test_entry_key_display() {
    assert_eq!(EntryKey::new(EntryKind::Income, 3).to_string(), "inc-3");
    assert_eq!(EntryKey::new(EntryKind::Expense, 0).to_string(), "exp-0");
}

// ── Entry ─────────────────────────────────────────────────────

#[test]
fn test_entry_new_defaults() {
    let entry = Entry::new(4, EntryKind::Expense, "Rent".into(), dec!(300));
    assert_eq!(entry.id, 4);
    assert_eq!(entry.description, "Rent");
    assert_eq!(entry.value, dec!(300));
    assert!(entry.percentage.is_none());
    assert!(entry.is_expense());
    assert!(!entry.is_income());
    assert_eq!(entry.key(), EntryKey::new(EntryKind::Expense, 4));
}
