//! Bordered overlay drawn on top of whatever screen is showing.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::ui::layouts::{self, PopupSize};

/// Clear a centered region of `parent_area`, frame it and return the
/// space left inside the border.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: PopupSize,
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size, parent_area);
    let block = Block::bordered()
        .title(Line::from(title).centered())
        .border_style(border_style);
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}
