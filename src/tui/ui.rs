use crate::tui::app::App;
use crate::tui::colors;
use crate::TABLE_HEADERS;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

const PLACEHOLDER: &str = "Enter food name (e.g., apple, chicken, *berry)";
const TIP: &str = "Tip: Use * as a wildcard (e.g., \"*berry\" for strawberries, blueberries)";
const EMPTY_STATE: &str = "Search for a food to get started";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Wildcard tip
            Constraint::Length(1), // Warning / summary
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Load more
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    frame.render_widget(
        Paragraph::new(TIP).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
    draw_message(frame, app, chunks[3]);
    draw_table(frame, app, chunks[4]);
    draw_load_more(frame, app, chunks[5]);
    draw_status_bar(frame, app, chunks[6]);

    if app.input.focused {
        frame.set_cursor_position(cursor_position(chunks[1], app.input.cursor_column()));
    }
}

/// Cursor cell inside the search box, pinned to its right border
fn cursor_position(search_bar: Rect, column: usize) -> Position {
    // border (1) + leading space (1)
    let max_offset = search_bar.width.saturating_sub(2);
    let offset = u16::try_from(column)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(max_offset);
    Position::new(
        search_bar.x.saturating_add(offset),
        search_bar.y.saturating_add(1),
    )
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Calorie Counter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let paragraph = if app.input.query.is_empty() {
        Paragraph::new(format!(" {}", PLACEHOLDER)).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(format!(" {}", app.input.query)).style(Style::default().fg(Color::White))
    };

    frame.render_widget(paragraph.block(block), area);
}

fn draw_message(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(warning) = app.search.warning {
        Line::from(Span::styled(
            format!("! {}", warning),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(summary) = app.search.summary() {
        Line::from(Span::styled(
            summary,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    // One row for the header
    let body_height = area.height.saturating_sub(1) as usize;
    app.table.set_visible_rows(body_height, app.search.visible().len());

    if app.search.results.is_empty() {
        if app.search.warning.is_none() {
            let empty = Paragraph::new(EMPTY_STATE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            frame.render_widget(empty, middle.intersection(area));
        }
        return;
    }

    let header_style = Style::default()
        .fg(Color::White)
        .bg(colors::HEADER_BG)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(TABLE_HEADERS[0]),
        Cell::from(TABLE_HEADERS[1]),
        Cell::from(Line::from(TABLE_HEADERS[2]).alignment(Alignment::Right)),
    ])
    .style(header_style)
    .height(1);

    let visible = app.search.visible();
    let start = app.table.scroll_offset.min(visible.len());
    let end = (start + body_height).min(visible.len());

    let rows: Vec<Row> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(visual_idx, food)| {
            let logical_idx = start + visual_idx;
            let is_selected = !app.input.focused && app.table.selected == Some(logical_idx);

            // Alternating row background
            let bg = if is_selected {
                colors::SELECTED_BG
            } else if visual_idx % 2 == 1 {
                colors::ALT_ROW_BG
            } else {
                Color::Reset
            };
            let modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            let name_cell = Cell::from(food.name.as_str())
                .style(Style::default().fg(Color::White).add_modifier(modifier));
            let portion_cell = Cell::from(food.portion.as_str()).style(Style::default().fg(Color::Gray));
            let calories_cell = Cell::from(
                Line::from(food.calories.to_string()).alignment(Alignment::Right),
            )
            .style(
                Style::default()
                    .fg(colors::color_for_calories(food.calories))
                    .add_modifier(Modifier::BOLD),
            );

            Row::new(vec![name_cell, portion_cell, calories_cell]).style(Style::default().bg(bg))
        })
        .collect();

    let widths = [Constraint::Fill(3), Constraint::Fill(2), Constraint::Length(10)];
    let table = Table::new(rows, widths).header(header);

    frame.render_widget(table, area);
}

fn draw_load_more(frame: &mut Frame, app: &App, area: Rect) {
    if !app.search.has_more() {
        return;
    }

    let text = format!(
        "\u{25BC} Load More Results ({} remaining)  [m]",
        app.search.remaining()
    );
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text = if app.input.focused {
        " Enter:Search  Esc:Clear  Tab:Results  Ctrl+Q:Quit "
    } else {
        " \u{2191}\u{2193}:Move  m:More  /:Search  Ctrl+L:Clear  Esc:Quit "
    };

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.chars().count();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BG));
    frame.render_widget(status, area);
}
