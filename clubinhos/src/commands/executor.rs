use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::{AppCommand, Effect};
use crate::state::{
    validators, AppState, CommentsState, LoadingState, LoginField, LoginState, LogsState,
    PageState, Scrollable,
};
use crate::ui::screens::Screen;
use clubinhos_auth::Credentials;

/// Lines moved by PageUp/PageDown
const PAGE_STEP: usize = 10;

/// Apply a command to the state and spawn whatever background work it asks for
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    if let Some(effect) = apply_command(command, state) {
        let task_id = effect.task_id();
        let data_loader = data_loader.clone();
        task_manager.spawn_load_task(task_id, async move {
            data_loader.perform(effect).await;
        });
    }
}

/// Apply a command without running its effect (tests, headless use)
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    apply_command(command, state)
}

/// State transition for a command; returns the side effect to run, if any
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Effect> {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let effect = match command {
        AppCommand::SelectNext => {
            move_selection(state, Movement::Next);
            None
        }
        AppCommand::SelectPrevious => {
            move_selection(state, Movement::Previous);
            None
        }
        AppCommand::NavigateToTop => {
            move_selection(state, Movement::Top);
            None
        }
        AppCommand::NavigateToBottom => {
            move_selection(state, Movement::Bottom);
            None
        }
        AppCommand::ScrollPage { down } => {
            move_selection(
                state,
                if down {
                    Movement::PageDown
                } else {
                    Movement::PageUp
                },
            );
            None
        }

        AppCommand::NavigateBack => {
            state.navigate_back();
            None
        }
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
            None
        }

        AppCommand::LoadRoutes => {
            tracing::debug!("Reloading route table");
            state.route_table.loading = LoadingState::loading();
            Some(Effect::LoadRoutes)
        }

        AppCommand::OpenRoute { route } => {
            let page = PageState::for_route(&route);
            tracing::info!(path = %route.path, entity_type = %route.entity_type, "Opening page");
            let effect = page
                .view
                .needs_fetch()
                .then(|| Effect::LoadPage(page.view.clone()));
            state.navigate_to(Screen::Page(Box::new(page)));
            effect
        }

        AppCommand::ReloadPage => match state.current_screen_mut() {
            Screen::Page(page) if page.view.needs_fetch() => {
                page.loading = LoadingState::loading();
                Some(Effect::LoadPage(page.view.clone()))
            }
            _ => None,
        },

        AppCommand::OpenLogin => {
            if !matches!(state.current_screen(), Screen::Login(_)) {
                state.navigate_to(Screen::Login(LoginState::default()));
            }
            None
        }

        AppCommand::NavigateLoginField => {
            if let Screen::Login(login) = state.current_screen_mut() {
                login.focused = match login.focused {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            None
        }

        AppCommand::AppendLoginChar(c) => {
            if let Screen::Login(login) = state.current_screen_mut() {
                login.focused_input_mut().push(c);
                clear_field_error(login);
            }
            None
        }

        AppCommand::DeleteLoginChar => {
            if let Screen::Login(login) = state.current_screen_mut() {
                login.focused_input_mut().pop();
                clear_field_error(login);
            }
            None
        }

        AppCommand::SubmitLogin => match state.current_screen_mut() {
            Screen::Login(login) if !login.loading.is_loading() => {
                login.errors = validators::validate_login(login);
                if login.errors.is_empty() {
                    login.message = None;
                    login.loading = LoadingState::loading();
                    Some(Effect::Login(Credentials::new(
                        login.email.trim(),
                        login.password.clone(),
                    )))
                } else {
                    tracing::debug!("Login form invalid: {:?}", login.errors);
                    None
                }
            }
            _ => None,
        },

        AppCommand::CancelLogin => {
            state.navigate_back();
            None
        }

        AppCommand::Logout => {
            if state.session.is_authenticated {
                Some(Effect::Logout)
            } else {
                None
            }
        }

        AppCommand::OpenProfile => {
            if !matches!(state.current_screen(), Screen::Profile) {
                state.navigate_to(Screen::Profile);
            }
            if state.session.is_authenticated && state.session.current_user.is_none() {
                state.session.is_loading_user = true;
                Some(Effect::LoadCurrentUser)
            } else {
                None
            }
        }

        AppCommand::LoadCurrentUser => {
            if state.session.is_authenticated {
                state.session.is_loading_user = true;
                Some(Effect::LoadCurrentUser)
            } else {
                None
            }
        }

        AppCommand::LoadComments => {
            match state.current_screen_mut() {
                Screen::Comments(comments) => comments.loading = LoadingState::loading(),
                _ => state.navigate_to(Screen::Comments(CommentsState {
                    loading: LoadingState::loading(),
                    ..Default::default()
                })),
            }
            Some(Effect::LoadComments)
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }
        AppCommand::DismissAlert => {
            state.alert = None;
            None
        }
        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => None,

        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    if !is_setting_pending_key {
        state.pending_key = None;
    }

    effect
}

enum Movement {
    Next,
    Previous,
    Top,
    Bottom,
    PageUp,
    PageDown,
}

fn move_selection(state: &mut AppState, movement: Movement) {
    let route_table = &state.route_table;
    match state.history.last_mut() {
        Some(Screen::Routes) => match movement {
            Movement::Next => route_table.select_next(),
            Movement::Previous => route_table.select_prev(),
            Movement::Top | Movement::PageUp => route_table.select_top(),
            Movement::Bottom | Movement::PageDown => route_table.select_bottom(),
        },
        Some(Screen::Comments(comments)) => match movement {
            Movement::Next => comments.select_next(),
            Movement::Previous => comments.select_prev(),
            Movement::Top | Movement::PageUp => comments.select_top(),
            Movement::Bottom | Movement::PageDown => comments.select_bottom(),
        },
        Some(Screen::Page(page)) => {
            page.scroll = match movement {
                Movement::Next => page.scroll.saturating_add(1),
                Movement::Previous => page.scroll.saturating_sub(1),
                Movement::PageDown => page.scroll.saturating_add(PAGE_STEP as u16),
                Movement::PageUp => page.scroll.saturating_sub(PAGE_STEP as u16),
                Movement::Top => 0,
                Movement::Bottom => u16::MAX,
            };
        }
        // Offset counts back from the newest entry
        Some(Screen::Logs(logs)) => {
            let max_offset = logs.total_entries.saturating_sub(1);
            logs.scroll_offset = match movement {
                Movement::Next => logs.scroll_offset.saturating_sub(1),
                Movement::Previous => (logs.scroll_offset + 1).min(max_offset),
                Movement::PageDown => logs.scroll_offset.saturating_sub(PAGE_STEP),
                Movement::PageUp => (logs.scroll_offset + PAGE_STEP).min(max_offset),
                Movement::Top => max_offset,
                Movement::Bottom => 0,
            };
        }
        Some(Screen::Login(_)) | Some(Screen::Profile) | None => {}
    }
}

fn clear_field_error(login: &mut LoginState) {
    match login.focused {
        LoginField::Email => login.errors.email = None,
        LoginField::Password => login.errors.password = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageView;
    use clubinhos_api::endpoints::routes::{EntityType, RouteEntry};

    fn route(entity_type: &str) -> RouteEntry {
        RouteEntry {
            id: "r1".to_string(),
            path: "/galeria".to_string(),
            entity_type: EntityType::from(entity_type),
            id_to_fetch: "id123".to_string(),
            title: "Galeria".to_string(),
            subtitle: None,
            description: None,
            image: None,
            public: true,
            current: false,
        }
    }

    #[test]
    fn opening_a_supported_route_fetches_its_view() {
        let mut state = AppState::new();
        let effect = apply_command(
            AppCommand::OpenRoute {
                route: Box::new(route("ImagesPage")),
            },
            &mut state,
        );

        match effect {
            Some(Effect::LoadPage(view)) => assert_eq!(
                view,
                PageView::ImageGallery {
                    id: "id123".to_string()
                }
            ),
            other => panic!("unexpected effect: {:?}", other),
        }
        assert!(matches!(state.current_screen(), Screen::Page(_)));
    }

    #[test]
    fn opening_an_unknown_route_fetches_nothing() {
        let mut state = AppState::new();
        let effect = apply_command(
            AppCommand::OpenRoute {
                route: Box::new(route("MeditationPage")),
            },
            &mut state,
        );

        assert!(effect.is_none());
        let Screen::Page(page) = state.current_screen() else {
            panic!("expected page screen");
        };
        assert_eq!(
            page.view,
            PageView::Unknown {
                entity_type: "MeditationPage".to_string()
            }
        );
    }

    #[test]
    fn invalid_login_makes_no_request() {
        let mut state = AppState::new();
        apply_command(AppCommand::OpenLogin, &mut state);
        for c in "ana@".chars() {
            apply_command(AppCommand::AppendLoginChar(c), &mut state);
        }

        let effect = apply_command(AppCommand::SubmitLogin, &mut state);
        assert!(effect.is_none());
        let Screen::Login(login) = state.current_screen() else {
            panic!("expected login screen");
        };
        assert_eq!(login.errors.email, Some("E-mail inválido"));
        assert_eq!(login.errors.password, Some("Informe a senha"));
        assert!(!login.loading.is_loading());
    }

    #[test]
    fn valid_login_submits_trimmed_email() {
        let mut state = AppState::new();
        apply_command(AppCommand::OpenLogin, &mut state);
        for c in " ana@clubinhos.org".chars() {
            apply_command(AppCommand::AppendLoginChar(c), &mut state);
        }
        apply_command(AppCommand::NavigateLoginField, &mut state);
        for c in "segredo".chars() {
            apply_command(AppCommand::AppendLoginChar(c), &mut state);
        }

        match apply_command(AppCommand::SubmitLogin, &mut state) {
            Some(Effect::Login(credentials)) => assert_eq!(credentials.email, "ana@clubinhos.org"),
            other => panic!("unexpected effect: {:?}", other),
        }

        // A second submit while the first is in flight is ignored
        assert!(apply_command(AppCommand::SubmitLogin, &mut state).is_none());
    }

    #[test]
    fn typing_clears_the_focused_field_error() {
        let mut state = AppState::new();
        apply_command(AppCommand::OpenLogin, &mut state);
        apply_command(AppCommand::SubmitLogin, &mut state);
        apply_command(AppCommand::AppendLoginChar('a'), &mut state);

        let Screen::Login(login) = state.current_screen() else {
            panic!("expected login screen");
        };
        assert_eq!(login.errors.email, None);
        assert_eq!(login.errors.password, Some("Informe a senha"));
    }

    #[test]
    fn profile_loads_user_when_missing() {
        let mut state = AppState::with_session(true);
        assert!(matches!(
            apply_command(AppCommand::OpenProfile, &mut state),
            Some(Effect::LoadCurrentUser)
        ));
        assert!(state.session.is_loading_user);

        let mut state = AppState::new();
        assert!(apply_command(AppCommand::OpenProfile, &mut state).is_none());
        assert!(matches!(state.current_screen(), Screen::Profile));
    }

    #[test]
    fn logs_scroll_is_bounded() {
        let mut state = AppState::new();
        apply_command(AppCommand::NavigateToLogs, &mut state);
        if let Screen::Logs(logs) = state.current_screen_mut() {
            logs.total_entries = 5;
        }

        apply_command(AppCommand::ScrollPage { down: false }, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 4);

        apply_command(AppCommand::SelectNext, &mut state);
        apply_command(AppCommand::NavigateToBottom, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 0);
    }
}
