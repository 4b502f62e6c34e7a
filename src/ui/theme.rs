//! Catppuccin Mocha colours, named after what they mark on the budget screen.

use ratatui::style::{Color, Modifier, Style};
use rust_decimal::Decimal;

use crate::models::EntryKind;

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const MANTLE: Color = Color::Rgb(24, 24, 37);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const BORDER: Color = Color::Rgb(69, 71, 90);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const MUTED: Color = Color::Rgb(127, 132, 156);
pub(crate) const FOCUS: Color = Color::Rgb(137, 180, 250);
pub(crate) const SURPLUS: Color = Color::Rgb(166, 227, 161);
pub(crate) const DEFICIT: Color = Color::Rgb(243, 139, 168);
pub(crate) const PROMPT: Color = Color::Rgb(249, 226, 175);

/// Income reads as surplus, expenses as deficit.
pub(crate) fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Income => SURPLUS,
        EntryKind::Expense => DEFICIT,
    }
}

pub(crate) fn budget_color(budget: Decimal) -> Color {
    if budget.is_sign_negative() {
        DEFICIT
    } else {
        SURPLUS
    }
}

pub(crate) fn amount_style(kind: EntryKind) -> Style {
    Style::default().fg(kind_color(kind))
}

pub(crate) fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { FOCUS } else { BORDER })
}

/// Zebra striping, with the cursor row drawn inverted.
pub(crate) fn row_style(selected: bool, odd: bool) -> Style {
    match (selected, odd) {
        (true, _) => Style::default().fg(BASE).bg(FOCUS),
        (false, true) => Style::default().fg(TEXT).bg(SURFACE),
        (false, false) => text_style(),
    }
}

pub(crate) fn text_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub(crate) fn title_style() -> Style {
    muted_style().add_modifier(Modifier::BOLD)
}

pub(crate) fn section_style() -> Style {
    Style::default().fg(PROMPT).add_modifier(Modifier::BOLD)
}

pub(crate) fn command_style() -> Style {
    Style::default().fg(TEXT).bg(MANTLE)
}

pub(crate) fn status_style() -> Style {
    Style::default().fg(MUTED).bg(SURFACE)
}
