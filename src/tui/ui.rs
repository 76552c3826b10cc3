//! UI rendering and layout module

use super::app::App;
use crate::table::RowKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the search box, the filtered table and the status line
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_search_box(frame, app, chunks[0]);
    draw_table(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);
}

fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.phrase.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Filter "));
    frame.render_widget(input, area);

    // Cursor sits after the last typed character, inside the border
    let typed = u16::try_from(app.phrase.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    frame.set_cursor_position((cursor_x.min(max_x), area.y + 1));
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .display_rows()
        .into_iter()
        .skip(app.scroll)
        .take(height)
        .map(|row| ListItem::new(Line::from(Span::styled(row.text, kind_style(row.kind)))))
        .collect();

    let title = format!(" {} ", app.header_text());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            app.count_label(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Enter: apply  Ctrl-U: clear  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn kind_style(kind: RowKind) -> Style {
    match kind {
        RowKind::Year => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RowKind::Engine => Style::default().fg(Color::Cyan),
        RowKind::Spanning => Style::default().fg(Color::DarkGray),
        RowKind::Blank | RowKind::Game => Style::default(),
    }
}
