use itertools::Itertools;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{CommentsState, LoadingState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &CommentsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Comentários", &state.loading);
    render_content(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        &[("j/k", "mover"), ("r", "recarregar"), ("h", "voltar"), ("?", "ajuda")],
    );
}

fn render_content(f: &mut Frame, area: Rect, state: &CommentsState) {
    if state.comments.is_empty() {
        match &state.loading {
            LoadingState::Loading(_) => empty_state::render_loading_state(
                f,
                area,
                "Comentários",
                "Carregando comentários...",
            ),
            LoadingState::Error(error) => empty_state::render_error_state(
                f,
                area,
                "Comentários",
                error,
                Some("Pressione r para tentar novamente"),
            ),
            _ => empty_state::render_empty_state(
                f,
                area,
                "Comentários",
                "Nenhum comentário publicado",
                None,
            ),
        }
        return;
    }

    let header = Row::new(vec![
        Cell::from("Nome"),
        Cell::from("Clubinho"),
        Cell::from("Comentário"),
        Cell::from("Data"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .comments
        .iter()
        .map(|comment| {
            let origin = [comment.clubinho.as_deref(), comment.neighborhood.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.is_empty())
                .join(" · ");

            Row::new(vec![
                Cell::from(comment.name.clone()),
                Cell::from(origin),
                Cell::from(utils::truncate(&comment.comment, 80)),
                Cell::from(utils::fmt_date(comment.created_at.as_ref())).style(theme::muted_style()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Percentage(48),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Comentários ({})", state.comments.len())),
    )
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}
