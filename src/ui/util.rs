use rust_decimal::Decimal;

use crate::models::EntryKind;

/// `$` and the magnitude in cents, thousands separated by `,`.
fn money(val: Decimal) -> String {
    let cents = format!("{:.2}", val.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{frac}")
}

/// Format an entry or total with the sign of its kind.
/// e.g. income `1000` → `"+ $1,000.00"`, expense `300` → `"- $300.00"`
pub(crate) fn format_signed(val: Decimal, kind: EntryKind) -> String {
    format!("{} {}", kind.sign(), money(val))
}

/// A surplus is signed like income, a deficit like an expense.
pub(crate) fn format_budget(budget: Decimal) -> String {
    let kind = if budget < Decimal::ZERO {
        EntryKind::Expense
    } else {
        EntryKind::Income
    };
    format_signed(budget, kind)
}

/// `Some(30)` → `"30%"`, `None` → `"---"`.
pub(crate) fn format_percentage(pct: Option<u32>) -> String {
    match pct {
        Some(p) => format!("{p}%"),
        None => "---".to_string(),
    }
}

/// Clip a description to `width` characters, marking the cut with `…`.
pub(crate) fn clip(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        None => text.to_string(),
        Some(_) if width == 0 => String::new(),
        Some(_) => {
            let kept: String = text.chars().take(width - 1).collect();
            kept + "…"
        }
    }
}

/// Selected row and first visible row of one entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl ListCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            self.follow(page);
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.scroll = self.scroll.min(self.index);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        self.index = len.saturating_sub(1);
        self.follow(page);
    }

    /// Pull the cursor back inside a list that shrank to `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
        self.scroll = self.scroll.min(self.index);
    }

    fn follow(&mut self, page: usize) {
        let page = page.max(1);
        if self.index >= self.scroll + page {
            self.scroll = self.index + 1 - page;
        }
    }
}
