pub const LOGIN_PATH: &str = "/login";

/// Client-side navigation hook used when the session must be abandoned
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
