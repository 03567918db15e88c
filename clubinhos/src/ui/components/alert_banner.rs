use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Inline error banner drawn over the help bar until dismissed
pub fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    f.render_widget(Clear, area);

    let line = Line::from(vec![
        Span::styled(message, theme::error_style()),
        Span::styled("  (Esc para fechar)", theme::help_text_style()),
    ]);
    let banner = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::danger_border_style())
            .title(" Erro "),
    );

    f.render_widget(banner, area);
}
