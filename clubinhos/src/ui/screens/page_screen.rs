use ratatui::prelude::*;

use crate::content::PageView;
use crate::state::PageState;
use crate::ui::{
    components::{
        help_bar::{self, KeyHint},
        screen_title,
    },
    layouts, pages,
};

pub fn render(f: &mut Frame, state: &PageState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = if state.title.is_empty() {
        state.view.label().to_string()
    } else {
        format!("{} · {}", state.title, state.path)
    };
    screen_title::render_screen_title(f, title_area, &title, &state.loading);
    pages::render_page(f, content_area, state);

    let help: &[KeyHint] = match state.view {
        PageView::Unknown { .. } => &[("h", "voltar"), ("?", "ajuda")],
        _ => &[
            ("j/k", "rolar"),
            ("PgUp/PgDn", "página"),
            ("r", "recarregar"),
            ("h", "voltar"),
            ("?", "ajuda"),
        ],
    };
    help_bar::render_help_bar(f, help_area, help);
}
