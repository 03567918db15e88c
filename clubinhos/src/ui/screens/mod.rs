pub mod comments_screen;
pub mod login_screen;
pub mod logs_screen;
pub mod page_screen;
pub mod profile_screen;
pub mod routes_screen;

use crate::state::{CommentsState, LoginState, LogsState, PageState};

#[derive(Debug, Clone)]
pub enum Screen {
    Routes,
    Page(Box<PageState>),
    Login(LoginState),
    Profile,
    Comments(CommentsState),
    Logs(LogsState),
}
