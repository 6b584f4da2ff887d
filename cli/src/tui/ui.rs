use chrono::Local;
use lyra_core::TaskRepository;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{App, Speaker};

pub fn draw<R: TaskRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let title = format!("LYRA  ·  {}", Local::now().format("%b %-d %Y"));
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    draw_dialog(f, app, content_chunks[0]);
    draw_task_panel(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let footer = Paragraph::new("Enter: Send | Esc: Quit | type 'help' for commands")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_dialog<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.dialog {
        let (label, style) = match entry.speaker {
            Speaker::User => ("you", Style::default().fg(Color::Yellow)),
            Speaker::Lyra => ("lyra", Style::default().fg(Color::Cyan)),
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", label),
            style.add_modifier(Modifier::BOLD),
        )));
        for text in entry.text.lines() {
            lines.push(Line::from(format!("  {}", text)));
        }
        lines.push(Line::from(""));
    }

    // Keep the newest lines in view.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Dialog ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(dialog, area);
}

fn draw_task_panel<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let style = if task.done {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}.{}", i + 1, task)).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.session.tasks().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn draw_input<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" Command ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
    f.set_cursor_position((area.x + 1 + app.cursor_column(), area.y + 1));
}
