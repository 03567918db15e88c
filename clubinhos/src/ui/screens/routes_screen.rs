use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{AppState, LoadingState};
use crate::ui::{
    components::{
        empty_state,
        help_bar::{self, KeyHint},
        screen_title,
    },
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = match &state.session.current_user {
        Some(user) => format!("Clubinhos · {}", user.name),
        None if state.session.is_authenticated => "Clubinhos · sessão ativa".to_string(),
        None => "Clubinhos".to_string(),
    };
    screen_title::render_screen_title(f, title_area, &title, &state.route_table.loading);
    render_content(f, content_area, state);

    let help: &[KeyHint] = if state.session.is_authenticated {
        &[
            ("j/k", "mover"),
            ("Enter", "abrir"),
            ("r", "recarregar"),
            ("o", "sair"),
            ("gp", "perfil"),
            ("?", "ajuda"),
        ]
    } else {
        &[
            ("j/k", "mover"),
            ("Enter", "abrir"),
            ("r", "recarregar"),
            ("L", "entrar"),
            ("?", "ajuda"),
        ]
    };
    help_bar::render_help_bar(f, help_area, help);
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let table_data = &state.route_table;
    let routes = table_data.visible_routes();

    if routes.is_empty() {
        match &table_data.loading {
            LoadingState::Loading(_) => {
                empty_state::render_loading_state(f, area, "Rotas", "Carregando rotas...")
            }
            LoadingState::Error(error) => empty_state::render_error_state(
                f,
                area,
                "Rotas",
                error,
                Some("Pressione r para tentar novamente"),
            ),
            _ => empty_state::render_empty_state(f, area, "Rotas", "Nenhuma rota disponível", None),
        }
        return;
    }

    let header = Row::new(vec![
        Cell::from("Título"),
        Cell::from("Caminho"),
        Cell::from("Tipo"),
        Cell::from("Visibilidade"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = routes
        .iter()
        .map(|route| {
            let title = if route.current {
                format!("{} ★", route.title)
            } else {
                route.title.clone()
            };
            let visibility = if route.public {
                Cell::from("Pública")
            } else {
                Cell::from("Restrita").style(theme::loading_style())
            };

            Row::new(vec![
                Cell::from(title),
                Cell::from(route.path.clone()).style(theme::muted_style()),
                Cell::from(utils::entity_type_label(&route.entity_type)),
                visibility,
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Rotas ({})", routes.len())),
    )
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut table_data.table_state.borrow_mut());
}
