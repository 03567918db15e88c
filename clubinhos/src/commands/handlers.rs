use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    if event.is_interrupt() {
        return Some(AppCommand::Quit);
    }

    // Priority 1: the login form captures typing
    if let Screen::Login(_) = state.current_screen() {
        return handle_login_keys(event);
    }

    // Priority 2: help popup takes precedence over screen keys
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 3: Esc dismisses the alert banner
    if state.alert.is_some() && key == Key::Esc {
        return Some(AppCommand::DismissAlert);
    }

    // Multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            ('g', Key::Char('c')) => Some(AppCommand::LoadComments),
            ('g', Key::Char('p')) => Some(AppCommand::OpenProfile),
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),
        (_, Key::Left | Key::Char('h') | Key::Esc) => Some(AppCommand::NavigateBack),
        (_, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (_, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (_, Key::PageUp) => Some(AppCommand::ScrollPage { down: false }),
        (_, Key::PageDown) => Some(AppCommand::ScrollPage { down: true }),

        // Routes screen
        (Screen::Routes, Key::Enter | Key::Right | Key::Char('l')) => state
            .route_table
            .selected_route()
            .map(|route| AppCommand::OpenRoute {
                route: Box::new(route.clone()),
            }),
        (Screen::Routes, Key::Char('r')) => Some(AppCommand::LoadRoutes),
        (Screen::Routes, Key::Char('L')) if !state.session.is_authenticated => {
            Some(AppCommand::OpenLogin)
        }
        (Screen::Routes, Key::Char('o')) if state.session.is_authenticated => {
            Some(AppCommand::Logout)
        }

        // Content page
        (Screen::Page(_), Key::Char('r')) => Some(AppCommand::ReloadPage),

        // Profile screen
        (Screen::Profile, Key::Char('o')) if state.session.is_authenticated => {
            Some(AppCommand::Logout)
        }
        (Screen::Profile, Key::Char('r')) => Some(AppCommand::LoadCurrentUser),
        (Screen::Profile, Key::Char('L')) if !state.session.is_authenticated => {
            Some(AppCommand::OpenLogin)
        }

        // Comments screen
        (Screen::Comments(_), Key::Char('r')) => Some(AppCommand::LoadComments),

        _ => None,
    }
}

fn handle_login_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::Esc => Some(AppCommand::CancelLogin),
        Key::Enter => Some(AppCommand::SubmitLogin),
        Key::Tab | Key::BackTab | Key::Up | Key::Down => Some(AppCommand::NavigateLoginField),
        Key::Backspace => Some(AppCommand::DeleteLoginChar),
        _ => event.typed_char().map(AppCommand::AppendLoginChar),
    }
}
