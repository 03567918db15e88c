use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Single-line bordered input; `masked` hides the value behind bullets
pub fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
) {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::styled(shown, theme::form_field_style())];
    if focused {
        spans.push(Span::styled("_", theme::loading_style()));
    }

    let border_style = if focused {
        theme::accent_border_style()
    } else {
        theme::help_text_style()
    };

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    );

    f.render_widget(field, area);
}
