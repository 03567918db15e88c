use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::state::{LoadingState, LoginField, LoginState};
use crate::ui::{
    components::{help_bar, popup, screen_title, text_field},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &LoginState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Entrar", &state.loading);
    render_form(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        &[("Tab", "trocar campo"), ("Enter", "entrar"), ("Esc", "cancelar")],
    );
}

fn render_form(f: &mut Frame, area: Rect, state: &LoginState) {
    let inner = popup::render_popup_frame(
        f,
        area,
        layouts::PopupSize::LOGIN_FORM,
        " Acesso da equipe ",
        theme::accent_border_style(),
    );

    let [email_area, email_error, password_area, password_error, _, status_area] =
        Layout::vertical([
            Constraint::Length(theme::INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(theme::INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

    text_field::render_text_field(
        f,
        email_area,
        "E-mail",
        &state.email,
        state.focused == LoginField::Email,
        false,
    );
    render_field_error(f, email_error, state.errors.email);

    text_field::render_text_field(
        f,
        password_area,
        "Senha",
        &state.password,
        state.focused == LoginField::Password,
        true,
    );
    render_field_error(f, password_error, state.errors.password);

    let status = match (&state.loading, &state.message) {
        (LoadingState::Loading(_), _) => Some(Span::styled("Entrando...", theme::loading_style())),
        (_, Some(message)) => Some(Span::styled(message.as_str(), theme::error_style())),
        _ => None,
    };
    if let Some(status) = status {
        f.render_widget(
            Paragraph::new(Line::from(status)).wrap(Wrap { trim: true }),
            status_area,
        );
    }
}

fn render_field_error(f: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(Span::styled(error, theme::error_style())),
            area,
        );
    }
}
