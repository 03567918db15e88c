//! Key hints along the bottom of every screen.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::theme;

/// A key (or key sequence) and what it does on the current screen
pub type KeyHint<'a> = (&'a str, &'a str);

pub fn render_help_bar(f: &mut Frame, area: Rect, hints: &[KeyHint]) {
    render_help_line(f, area, hint_line(hints));
}

/// Draw a prepared hint line, for screens that append their own status
pub fn render_help_line(f: &mut Frame, area: Rect, line: Line) {
    let help = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::bordered());

    f.render_widget(help, area);
}

/// `key: action` pairs separated by bars, keys highlighted
pub fn hint_line<'a>(hints: &[KeyHint<'a>]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme::muted_style()));
        }
        spans.push(Span::styled(*key, theme::header_style()));
        spans.push(Span::styled(format!(": {}", action), theme::help_text_style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn hints_are_joined_with_bars() {
        let line = hint_line(&[("j/k", "mover"), ("r", "recarregar")]);
        assert_eq!(text(&line), "j/k: mover | r: recarregar");
        assert_eq!(line.spans[0].style, theme::header_style());
    }

    #[test]
    fn no_hints_is_an_empty_line() {
        assert!(hint_line(&[]).spans.is_empty());
    }
}
