pub mod reducer;
pub mod validators;

use crate::content::{PageContent, PageView};
use crate::ui::screens::Screen;
use clubinhos_api::endpoints::{auth::User, comments::Comment, routes::RouteEntry};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;
use validators::LoginErrors;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn loading() -> Self {
        Self::Loading(ThrobberState::default())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    fn throbber_mut(&mut self) -> Option<&mut ThrobberState> {
        match self {
            Self::Loading(throbber) => Some(throbber),
            _ => None,
        }
    }
}

/// Routes fetched at startup; private entries are listed only with a session
#[derive(Default, Debug, Clone)]
pub struct RouteTable {
    pub routes: Vec<RouteEntry>,
    pub loading: LoadingState,
    pub include_private: bool,
    pub table_state: RefCell<TableState>,
}

impl RouteTable {
    pub fn visible_routes(&self) -> Vec<&RouteEntry> {
        self.routes
            .iter()
            .filter(|route| route.public || self.include_private)
            .collect()
    }

    pub fn selected_route(&self) -> Option<&RouteEntry> {
        let index = self.table_state.borrow().selected()?;
        self.visible_routes().get(index).copied()
    }

    /// Keep the selection inside the visible list after it changes
    pub fn clamp_selection(&self) {
        let len = self.visible_routes().len();
        let mut table_state = self.table_state.borrow_mut();
        match (len, table_state.selected()) {
            (0, _) => table_state.select(None),
            (_, None) => table_state.select(Some(0)),
            (len, Some(i)) if i >= len => table_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

/// What the UI knows about the session, mirrored from data events
#[derive(Default, Debug, Clone)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
    pub is_loading_user: bool,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub route_table: RouteTable,
    pub session: SessionView,

    // UI state
    pub alert: Option<String>,
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_session(false)
    }

    /// Start on the route table, with private routes listed when a session was restored
    pub fn with_session(is_authenticated: bool) -> Self {
        Self {
            history: vec![Screen::Routes],
            route_table: RouteTable {
                include_private: is_authenticated,
                ..Default::default()
            },
            session: SessionView {
                is_authenticated,
                ..Default::default()
            },
            alert: None,
            help_visible: false,
            pending_key: None,
            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Returns false when already at the root screen
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Drop everything above the route table
    pub fn navigate_home(&mut self) {
        self.history.truncate(1);
    }

    /// Throbber of whatever is loading on the current screen
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        let route_loading = &mut self.route_table.loading;
        match self.history.last_mut() {
            Some(Screen::Page(page)) => page.loading.throbber_mut(),
            Some(Screen::Login(login)) => login.loading.throbber_mut(),
            Some(Screen::Comments(comments)) => comments.loading.throbber_mut(),
            Some(Screen::Routes) | None => route_loading.throbber_mut(),
            Some(Screen::Profile) | Some(Screen::Logs(_)) => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A mounted content page
#[derive(Debug, Clone)]
pub struct PageState {
    pub view: PageView,
    pub title: String,
    pub path: String,
    pub content: Option<PageContent>,
    pub loading: LoadingState,
    pub scroll: u16,
}

impl PageState {
    pub fn for_route(route: &RouteEntry) -> Self {
        let view = PageView::from(route);
        let loading = if view.needs_fetch() {
            LoadingState::loading()
        } else {
            LoadingState::NotStarted
        };
        Self {
            view,
            title: route.title.clone(),
            path: route.path.clone(),
            content: None,
            loading,
            scroll: 0,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Default, Clone)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focused: LoginField,
    pub errors: LoginErrors,
    /// Rejection from the backend, or why the user was sent here
    pub message: Option<String>,
    pub loading: LoadingState,
}

impl LoginState {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focused {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("focused", &self.focused)
            .field("errors", &self.errors)
            .field("message", &self.message)
            .field("loading", &self.loading)
            .finish()
    }
}

#[derive(Default, Debug, Clone)]
pub struct CommentsState {
    pub comments: Vec<Comment>,
    pub loading: LoadingState,
    pub table_state: RefCell<TableState>,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(self.num_items() - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    fn select_top(&self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select_first();
        }
    }

    fn select_bottom(&self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }
}

impl Scrollable for RouteTable {
    fn num_items(&self) -> usize {
        self.visible_routes().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for CommentsState {
    fn num_items(&self) -> usize {
        self.comments.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
