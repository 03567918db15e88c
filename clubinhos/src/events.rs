use crate::content::{PageContent, PageView};
use clubinhos_api::endpoints::{auth::User, comments::Comment, routes::RouteEntry};
use clubinhos_auth::Credentials;

/// Commands to execute (user actions → background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,
    ScrollPage { down: bool },

    // Navigation
    NavigateBack,
    NavigateToLogs,

    // Routes and content
    LoadRoutes,
    OpenRoute { route: Box<RouteEntry> },
    ReloadPage,

    // Session
    OpenLogin,
    NavigateLoginField,
    AppendLoginChar(char),
    DeleteLoginChar,
    SubmitLogin,
    CancelLogin,
    Logout,
    OpenProfile,
    LoadCurrentUser,

    // Comments
    LoadComments,

    // UI state
    ToggleHelp,
    DismissAlert,
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Side effect requested by a command, run off the UI loop
#[derive(Debug)]
pub enum Effect {
    LoadRoutes,
    LoadPage(PageView),
    Login(Credentials),
    Logout,
    LoadCurrentUser,
    LoadComments,
}

impl Effect {
    /// Tasks sharing an id replace each other
    pub fn task_id(&self) -> &'static str {
        match self {
            Self::LoadRoutes => "load_routes",
            Self::LoadPage(_) => "load_page",
            Self::Login(_) | Self::Logout => "session",
            Self::LoadCurrentUser => "load_current_user",
            Self::LoadComments => "load_comments",
        }
    }
}

/// Data events (background tasks → UI state updates)
#[derive(Debug, Clone)]
pub enum DataEvent {
    RoutesLoaded {
        routes: Vec<RouteEntry>,
    },
    RoutesLoadFailed {
        error: String,
    },

    PageLoaded {
        view: PageView,
        content: PageContent,
    },
    PageLoadFailed {
        view: PageView,
        error: String,
    },

    LoginSucceeded {
        user: Option<User>,
    },
    LoginFailed {
        error: String,
    },
    LoggedOut,
    CurrentUserLoaded {
        user: User,
    },

    CommentsLoaded {
        comments: Vec<Comment>,
    },

    /// The session layer asked to move to another path (e.g. `/login`)
    NavigationRequested {
        path: String,
    },

    // Errors
    LoadError {
        error: String,
    },
}
