//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::app::{App, Mode};

/// Primary accent color
const ACCENT: Color = Color::Rgb(40, 102, 215);
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the cursor row
const HIGHLIGHT: Color = Color::Yellow;
/// Delete control when enabled
const DANGER: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

const SEARCH_PLACEHOLDER: &str = "Search by name, email, role...";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + delete
            Constraint::Min(5),    // Member table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(chunks[0]);

    render_search(frame, app, top[0]);
    render_delete(frame, app, top[1]);
    render_table(frame, app, chunks[1]);
    render_pagination(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the search input
fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let is_editing = app.mode == Mode::Search;
    let color = if is_editing { Color::Magenta } else { SECONDARY };

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let query = app.table.query();
    let line = if is_editing {
        Line::from(format!("{}|", query))
    } else if query.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(DIM)))
    } else {
        Line::from(query)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the delete control, dimmed while nothing is checked
fn render_delete(frame: &mut Frame, app: &App, area: Rect) {
    let checked = app.table.checked().len();
    let style = if app.table.can_delete() {
        Style::default()
            .fg(Color::White)
            .bg(DANGER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let label = format!(" Delete ({}) ", checked);
    frame.render_widget(Paragraph::new(Span::styled(label, style)).block(block), area);
}

/// Render the member table
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let rows_shown = app.table.displayed();

    let title = if !app.table.is_filtered() {
        format!(" MEMBERS LIST :: {} ", app.source_label)
    } else {
        format!(
            " MEMBERS LIST :: filter '{}' ({} on page) ",
            app.table.query(),
            rows_shown.len()
        )
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    if rows_shown.is_empty() {
        let placeholder = if app.table.is_filtered() {
            "  No matches"
        } else {
            "  No members"
        };
        let paragraph = Paragraph::new(Span::styled(placeholder, Style::default().fg(DIM)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["", "ID", "Name", "Email", "Role"])
        .style(Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = rows_shown
        .iter()
        .map(|member| {
            let checkbox = if member.checked { "[x]" } else { "[ ]" };
            let style = if member.checked {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(member.id.to_string()),
                Cell::from(member.name.as_str()),
                Cell::from(member.email.as_str()),
                Cell::from(member.role.as_str()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Percentage(30),
        Constraint::Percentage(45),
        Constraint::Percentage(25),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render first/prev/page/next/last, dimming the disabled controls
fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let members = app.provider.members();
    let back = app.table.can_go_back();
    let forward = app.table.can_go_forward(members);

    let control = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        control(" |< First ", back),
        control(" < Prev ", back),
        Span::styled(
            format!(" Page {} ", app.table.page()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        control(" Next > ", forward),
        control(" Last >| ", forward),
    ])
    .centered();

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
    };

    let help_text = match app.mode {
        Mode::Normal => "j/k:row  space:check  d:delete  n/p:page  g/G:first/last  /:search  q:quit",
        Mode::Search => "Type to filter  Ctrl+u:clear  Enter/Esc:done",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
