// src/ui.rs
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Mode};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);
    draw_table(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::raw(app.session.directory.display().to_string()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.session.filter().name),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" fmtui ")
            .title_alignment(Alignment::Left),
    );
    frame.render_widget(header, area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Name", "Size", "Modified Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .session
        .catalog
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                row.name.clone(),
                row.size_display.clone(),
                row.modified_display.clone(),
            ])
        })
        .collect();
    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(20),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.session.catalog.is_empty() {
        state.select(Some(app.selected.min(app.session.catalog.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (title, text) = match &app.mode {
        Mode::DirPrompt { input } => (" directory ", format!("{}_", input)),
        Mode::ExportPrompt { input } => (" export to ", format!("{}_", input)),
        Mode::Browse => (
            " status ",
            match &app.status {
                Some(message) => message.clone(),
                None => String::from(
                    "g: directory  Tab: filter  Enter: open  e: export  r: rescan  q: quit",
                ),
            },
        ),
    };
    let footer =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(footer, area);
}
