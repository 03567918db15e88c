use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{LoadingState, SessionView};
use crate::ui::{
    components::{
        empty_state,
        help_bar::{self, KeyHint},
        screen_title,
    },
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, session: &SessionView) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let loading = if session.is_loading_user {
        LoadingState::loading()
    } else {
        LoadingState::NotStarted
    };
    screen_title::render_screen_title(f, title_area, "Perfil", &loading);

    let help: &[KeyHint] = if session.is_authenticated {
        &[("r", "recarregar"), ("o", "sair"), ("h", "voltar"), ("?", "ajuda")]
    } else {
        &[("L", "entrar"), ("h", "voltar"), ("?", "ajuda")]
    };

    match (&session.current_user, session.is_authenticated) {
        (_, false) => empty_state::render_empty_state(
            f,
            content_area,
            "Perfil",
            "Você não está conectado",
            Some("Pressione L para entrar"),
        ),
        (None, true) if session.is_loading_user => {
            empty_state::render_loading_state(f, content_area, "Perfil", "Carregando perfil...")
        }
        (None, true) => empty_state::render_empty_state(
            f,
            content_area,
            "Perfil",
            "Perfil indisponível",
            Some("Pressione r para tentar novamente"),
        ),
        (Some(user), true) => {
            let field = |label: &'static str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{:18}", label), theme::header_style()),
                    Span::raw(value),
                ])
            };
            let lines = vec![
                field("Nome", user.name.clone()),
                field("E-mail", user.email.clone()),
                field("Telefone", user.phone.clone().unwrap_or_else(|| "-".to_string())),
                field("Papel", utils::role_label(user.role).to_string()),
                field("Ativo", utils::yes_no(user.active).to_string()),
                field("Cadastro completo", utils::yes_no(user.completed).to_string()),
            ];
            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(user.name.as_str()));
            f.render_widget(paragraph, content_area);
        }
    }

    help_bar::render_help_bar(f, help_area, help);
}
