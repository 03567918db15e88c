use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::content::PageView;
use crate::ui::theme;

pub fn render(f: &mut Frame, area: Rect, entity_type: &str) {
    let message = PageView::fallback_message(entity_type);
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::error_style())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Página "));

    f.render_widget(paragraph, area);
}
