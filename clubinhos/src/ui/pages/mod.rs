//! One view per supported page type, plus the fallback for unknown types.

pub mod ideas_page;
pub mod image_gallery;
mod media;
pub mod unknown_page;
pub mod video_page;
pub mod week_materials;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::content::{PageContent, PageView};
use crate::state::{LoadingState, PageState};
use crate::ui::components::empty_state;

/// Draw the view matching the page's variant, and only that view
pub fn render_page(f: &mut Frame, area: Rect, page: &PageState) {
    if let PageView::Unknown { entity_type } = &page.view {
        unknown_page::render(f, area, entity_type);
        return;
    }

    let Some(content) = &page.content else {
        match &page.loading {
            LoadingState::Error(error) => empty_state::render_error_state(
                f,
                area,
                page.view.label(),
                error,
                Some("Pressione r para tentar novamente"),
            ),
            _ => empty_state::render_loading_state(f, area, page.view.label(), "Carregando..."),
        }
        return;
    };

    let lines = match content {
        PageContent::ImageGallery(gallery) => image_gallery::lines(gallery),
        PageContent::Videos(videos) => video_page::lines(videos),
        PageContent::WeekMaterials(materials) => week_materials::lines(materials),
        PageContent::Ideas(ideas) => ideas_page::lines(ideas),
    };

    render_lines(f, area, page.view.label(), lines, page.scroll);
}

/// Scrollable bordered body; scrolling stops at the last line
fn render_lines(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>, scroll: u16) {
    let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        );

    f.render_widget(paragraph, area);
}
