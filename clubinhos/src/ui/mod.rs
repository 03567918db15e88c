pub mod components;
pub mod layouts;
pub mod pages;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Read-only render dispatcher: draws the current screen, then overlays
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Routes => routes_screen::render(f, state),
        Screen::Page(page_state) => page_screen::render(f, page_state),
        Screen::Login(login_state) => login_screen::render(f, login_state),
        Screen::Profile => profile_screen::render(f, &state.session),
        Screen::Comments(comments_state) => comments_screen::render(f, comments_state),
        Screen::Logs(logs_state) => logs_screen::render(f, logs_state, log_buffer),
    }

    if let Some(alert) = &state.alert {
        let (_, _, help_area) = layouts::screen_layout(f.area());
        components::alert_banner::render_alert(f, help_area, alert);
    }

    if state.help_visible {
        components::help_popup::render_help_popup(
            f,
            state.current_screen(),
            state.session.is_authenticated,
        );
    }
}
