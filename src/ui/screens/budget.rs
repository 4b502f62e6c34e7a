use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Entry, EntryKind};
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::{clip, format_budget, format_percentage, format_signed};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Budget header
            Constraint::Length(3), // Entry form
            Constraint::Min(4),    // Lists
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app);
    render_lists(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let agg = &app.board.aggregate;
    render_card(
        f,
        cols[0],
        &format!("Available budget in {}", app.period),
        format_budget(agg.budget),
        theme::budget_color(agg.budget),
        None,
    );
    render_card(
        f,
        cols[1],
        EntryKind::Income.label(),
        format_signed(agg.total_income, EntryKind::Income),
        theme::SURPLUS,
        Some(format!("{} entries", app.board.incomes.len())),
    );
    render_card(
        f,
        cols[2],
        EntryKind::Expense.label(),
        format_signed(agg.total_expense, EntryKind::Expense),
        theme::DEFICIT,
        Some(format!(
            "{} of income",
            format_percentage(agg.overall_percentage)
        )),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    display: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(false))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::muted_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.board.form;
    let editing = app.input_mode == InputMode::Form;

    let field_style = |field: FormField| theme::row_style(editing && form.field == field, false);

    let kind_label = format!(" {} {} ", form.kind.sign(), form.kind.label());
    let value = if form.value.is_empty() && !(editing && form.field == FormField::Value) {
        "Value".to_string()
    } else {
        form.value.clone()
    };
    let description = if form.description.is_empty()
        && !(editing && form.field == FormField::Description)
    {
        "Add description".to_string()
    } else {
        form.description.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            kind_label,
            field_style(FormField::Kind).fg(theme::kind_color(form.kind)),
        ),
        Span::raw("  "),
        Span::styled(format!(" {description:<32} "), field_style(FormField::Description)),
        Span::raw("  "),
        Span::styled(format!(" {value:>12} "), field_style(FormField::Value)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(editing))
        .title(Span::styled(" New entry (a) ", theme::title_style()));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_lists(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_list(f, cols[0], app, EntryKind::Income);
    render_list(f, cols[1], app, EntryKind::Expense);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, kind: EntryKind) {
    let entries = app.board.list(kind);
    let focused = app.focus == kind;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(
            format!(" {} ({}) ", kind.label(), entries.len()),
            Style::default()
                .fg(theme::kind_color(kind))
                .add_modifier(Modifier::BOLD),
        ));

    if entries.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No {} yet", kind.label().to_lowercase()),
                theme::muted_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let cursor = app.cursor(kind);
    let desc_width = area.width.saturating_sub(28) as usize;

    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, entry)| {
            let selected = focused && i == cursor.index;
            entry_row(entry, desc_width).style(theme::row_style(selected, i % 2 == 1))
        })
        .collect();

    let widths = [
        Constraint::Min(10),
        Constraint::Length(16),
        Constraint::Length(6),
    ];
    f.render_widget(Table::new(rows, widths).block(block), area);
}

fn entry_row(entry: &Entry, desc_width: usize) -> Row<'static> {
    let amount = Span::styled(
        format_signed(entry.value, entry.kind),
        theme::amount_style(entry.kind),
    );
    let pct = if entry.is_expense() {
        format_percentage(entry.percentage)
    } else {
        String::new()
    };
    Row::new(vec![
        Cell::from(clip(&entry.description, desc_width.max(1))),
        Cell::from(Line::from(amount).right_aligned()),
        Cell::from(Line::from(Span::styled(pct, theme::muted_style())).right_aligned()),
    ])
}
