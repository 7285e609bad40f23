//! Seam between the view models and the remote REST API.

use crate::{
    error::FetchError,
    types::{Post, UserId, UserProfile, UserSummary},
};
use std::future::Future;

/// Public JSON placeholder service the directory reads from by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Remote user directory. Futures are not `Send` so browser clients can
/// implement this on the UI thread.
pub trait DirectoryApi {
    /// `GET /users`
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserSummary>, FetchError>>;

    /// `GET /users/{id}`; `Ok(None)` when the body is empty.
    fn get_user(&self, id: UserId)
        -> impl Future<Output = Result<Option<UserProfile>, FetchError>>;

    /// `GET /posts?userId={id}`
    fn list_posts(&self, id: UserId) -> impl Future<Output = Result<Vec<Post>, FetchError>>;
}

/// Request paths, relative to the API base URL.
pub mod endpoints {
    use crate::types::UserId;

    #[must_use]
    pub fn users() -> String {
        "/users".to_string()
    }

    #[must_use]
    pub fn user(id: UserId) -> String {
        format!("/users/{id}")
    }

    #[must_use]
    pub fn posts_by_user(id: UserId) -> String {
        format!("/posts?userId={id}")
    }
}

/// Joins a base URL and a path without doubling or dropping the slash.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
