use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Budget
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    super::screens::budget::render(f, chunks[0], app);
    render_status_bar(f, chunks[1], app);
    render_command_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::FOCUS,
        InputMode::Form | InputMode::Command => theme::SURPLUS,
        InputMode::Confirm => theme::DEFICIT,
    };
    let mode_style = Style::default()
        .fg(theme::BASE)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} income, {} expenses",
        app.period,
        app.board.incomes.len(),
        app.board.expenses.len()
    );

    let right = match app.input_mode {
        InputMode::Form => " Tab next field | Space toggle +/- | Enter add | Esc done ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Confirm => " y confirm | any key cancel ",
        InputMode::Normal => " a add | D delete | Tab switch list | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_style()),
        Span::styled(" ".repeat(pad), theme::status_style()),
        Span::styled(right, theme::status_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::FOCUS)),
                Span::styled(&app.command_input, theme::command_style()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::PROMPT)),
                Span::styled(" [y/N] ", Style::default().fg(theme::DEFICIT)),
            ]),
            None,
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add an entry, : for commands, ? for help",
                    theme::muted_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::MANTLE));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn help_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, theme::text_style()))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " Budgety Help ",
            Style::default()
                .fg(theme::FOCUS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", theme::section_style())),
        help_line("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        help_line("  Tab              Switch income/expense Ctrl-q     Quit"),
        Line::from(""),
        Line::from(Span::styled(" Entries", theme::section_style())),
        help_line("  a or i           Open the entry form   +/-        Form as income/expense"),
        help_line("  Tab/Shift-Tab    Next/previous field   Space      Toggle +/- (type field)"),
        help_line("  Enter            Add entry             Esc        Leave the form"),
        help_line("  D                Delete selected       :          Command mode"),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::section_style())),
    ];

    // Longest name first so aliases sharing a description collapse into it
    let mut registry: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    registry.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (name, description) in registry {
        if seen.insert(description) {
            cmd_lines.push((name, description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<22} {desc}"),
            theme::text_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::muted_style(),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 80.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::FOCUS))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
