use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::EntryKind;

/// Why a form submission was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("not a number: '{0}'")]
    InvalidValue(String),
    #[error("value must be positive, got {0}")]
    NonPositiveValue(Decimal),
    #[error("value must be at most 1000000000000000, got {0}")]
    ValueTooLarge(Decimal),
}

/// Largest accepted amount, one quadrillion. Keeps every total far
/// below `Decimal::MAX`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub raw_value: String,
}

/// An entry that passed validation and is ready for the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub description: String,
    pub value: Decimal,
}

impl EntryInput {
    pub fn new(kind: EntryKind, description: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            raw_value: raw_value.into(),
        }
    }

    pub fn validate(&self) -> Result<EntryDraft, InputError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let value = parse_amount(&self.raw_value)?;
        Ok(EntryDraft {
            kind: self.kind,
            description: description.to_string(),
            value,
        })
    }
}

/// Parse a positive amount up to [`MAX_AMOUNT`]. Accepts a leading `$` and
/// `,` thousands separators, e.g. `"$1,250.50"`.
pub fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = Decimal::from_str(&cleaned)
        .map_err(|_| InputError::InvalidValue(raw.trim().to_string()))?;
    if value <= Decimal::ZERO {
        return Err(InputError::NonPositiveValue(value));
    }
    if value > Decimal::from(MAX_AMOUNT) {
        return Err(InputError::ValueTooLarge(value));
    }
    Ok(value)
}
