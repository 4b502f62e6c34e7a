use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "inc",
            Self::Expense => "exp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }

    /// Sign shown in front of amounts of this kind.
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    pub fn all() -> &'static [EntryKind] {
        &[Self::Income, Self::Expense]
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inc" | "income" | "+" => Ok(Self::Income),
            "exp" | "expense" | "-" => Ok(Self::Expense),
            other => Err(format!("Unknown entry type: {other}")),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Addresses one entry: ids are only unique within a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub kind: EntryKind,
    pub id: u64,
}

impl EntryKey {
    pub fn new(kind: EntryKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl FromStr for EntryKey {
    type Err = String;

    /// Parses `inc-3` / `exp-0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Expected <inc|exp>-<id>, got: {s}"))?;
        let kind = kind.parse::<EntryKind>()?;
        let id = id
            .parse::<u64>()
            .map_err(|_| format!("Invalid entry id: {id}"))?;
        Ok(Self { kind, id })
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub kind: EntryKind,
    pub description: String,
    pub value: Decimal,
    /// Share of total income, expenses only. `None` while income is zero
    /// or before the first percentage pass.
    pub percentage: Option<u32>,
}

impl Entry {
    pub fn new(id: u64, kind: EntryKind, description: String, value: Decimal) -> Self {
        Self {
            id,
            kind,
            description,
            value,
            percentage: None,
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.kind, self.id)
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}
