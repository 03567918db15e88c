use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Logs ({} entradas)", state.total_entries);
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);
    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.snapshot();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, "Logs da sessão", "Nenhum log ainda", None);
        return;
    }

    // Newest at the bottom; the offset scrolls back from there
    let inner_height = area.height.saturating_sub(3) as usize;
    let offset = state.scroll_offset.min(total - 1);
    let end = total - offset;
    let start = end.saturating_sub(inner_height);

    let rows: Vec<Row> = entries[start..end]
        .iter()
        .map(|entry| {
            let (level_str, level_style) = match entry.level {
                Level::ERROR => ("ERROR", theme::error_style().add_modifier(Modifier::BOLD)),
                Level::WARN => ("WARN ", theme::loading_style()),
                Level::INFO => ("INFO ", theme::success_style()),
                Level::DEBUG => ("DEBUG", Style::default().fg(Color::Blue)),
                Level::TRACE => ("TRACE", theme::muted_style()),
            };

            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_str.to_string(),
                truncate_target(&entry.target, 25),
                utils::truncate(&entry.message, 500),
            ])
            .style(level_style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(25),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} de {}] ",
            start + 1,
            end,
            total
        )))
        .header(
            Row::new(vec!["Hora", "Nível", "Origem", "Mensagem"]).style(theme::header_style()),
        );

    f.render_widget(table, area);
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let mut line = help_bar::hint_line(&[
        ("j/k", "rolar"),
        ("G", "fim"),
        ("gg", "início"),
        ("PgUp/PgDn", "página"),
        ("h", "voltar"),
        ("?", "ajuda"),
    ]);
    if state.scroll_offset > 0 {
        line.push_span(Span::styled(
            format!(" ({} acima do fim)", state.scroll_offset),
            theme::muted_style(),
        ));
    }

    help_bar::render_help_line(f, area, line);
}

/// Keep the tail of a module path, which is the informative part
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
