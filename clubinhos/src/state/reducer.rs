use super::{AppState, CommentsState, LoadingState, LoginState, SessionView};
use crate::events::DataEvent;
use crate::ui::screens::Screen;
use clubinhos_auth::LOGIN_PATH;
use ratatui::widgets::TableState;
use std::cell::RefCell;

pub const SESSION_EXPIRED_MESSAGE: &str = "Sua sessão expirou. Entre novamente.";

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::RoutesLoaded { routes } => {
            state.route_table.routes = routes;
            state.route_table.loading = LoadingState::Loaded;
            state.route_table.clamp_selection();
        }

        // The table stays empty; the user can reload by hand
        DataEvent::RoutesLoadFailed { error } => {
            state.route_table.routes.clear();
            state.route_table.loading = LoadingState::Error(error.clone());
            state.route_table.clamp_selection();
            state.alert = Some(format!("Não foi possível carregar as rotas: {}", error));
        }

        DataEvent::PageLoaded { view, content } => {
            if let Screen::Page(page) = state.current_screen_mut() {
                if page.view == view && content.matches(&view) {
                    page.content = Some(content);
                    page.loading = LoadingState::Loaded;
                    return;
                }
            }
            tracing::debug!("Discarding content for {:?}, page no longer shown", view);
        }

        DataEvent::PageLoadFailed { view, error } => {
            if let Screen::Page(page) = state.current_screen_mut() {
                if page.view == view {
                    page.loading = LoadingState::Error(error.clone());
                    state.alert = Some(format!("Não foi possível carregar a página: {}", error));
                }
            }
        }

        DataEvent::LoginSucceeded { user } => {
            state.session = SessionView {
                is_authenticated: true,
                current_user: user,
                is_loading_user: false,
            };
            state.route_table.include_private = true;
            state.route_table.clamp_selection();
            state.alert = None;
            if matches!(state.current_screen(), Screen::Login(_)) {
                state.navigate_back();
            }
        }

        DataEvent::LoginFailed { error } => {
            if let Screen::Login(login) = state.current_screen_mut() {
                login.loading = LoadingState::Error(error.clone());
                login.message = Some(error);
            }
        }

        DataEvent::LoggedOut => {
            end_session(state);
            state.navigate_home();
        }

        DataEvent::CurrentUserLoaded { user } => {
            state.session.current_user = Some(user);
            state.session.is_loading_user = false;
        }

        DataEvent::CommentsLoaded { comments } => {
            if let Screen::Comments(comments_state) = state.current_screen_mut() {
                *comments_state = CommentsState {
                    table_state: RefCell::new(
                        TableState::default().with_selected((!comments.is_empty()).then_some(0)),
                    ),
                    comments,
                    loading: LoadingState::Loaded,
                };
            }
        }

        DataEvent::NavigationRequested { path } => {
            if path == LOGIN_PATH {
                end_session(state);
                state.navigate_home();
                state.navigate_to(Screen::Login(LoginState::with_message(
                    SESSION_EXPIRED_MESSAGE,
                )));
            } else {
                tracing::warn!(path = %path, "No screen for requested path");
            }
        }

        DataEvent::LoadError { error } => {
            state.session.is_loading_user = false;
            if let Screen::Comments(comments_state) = state.current_screen_mut() {
                comments_state.loading = LoadingState::Error(error.clone());
            }
            state.alert = Some(error);
        }
    }
}

fn end_session(state: &mut AppState) {
    state.session = SessionView::default();
    state.route_table.include_private = false;
    state.route_table.clamp_selection();
}
