//! User detail view model: profile and posts fetched together, all or nothing.

use crate::{
    api::DirectoryApi,
    error::FetchError,
    state::{FetchTicket, Generation, ViewState},
    types::{Post, UserDetail, UserId, UserProfile},
};
use futures::future::try_join;
use tracing::{debug, warn};

/// Shown for any failure of either request.
pub const GENERIC_DETAIL_ERROR: &str = "Error fetching data. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailDisplay<'a> {
    Loading,
    Error(&'a str),
    NotFound,
    Profile {
        profile: &'a UserProfile,
        posts: &'a [Post],
    },
}

/// Requests posts and profile concurrently. The first failure wins and the
/// other request is dropped.
///
/// # Errors
///
/// Returns the first `FetchError` produced by either request.
pub async fn fetch_detail<A: DirectoryApi>(api: &A, id: UserId) -> Result<UserDetail, FetchError> {
    let (posts, profile) = try_join(api.list_posts(id), api.get_user(id)).await?;
    Ok(UserDetail { profile, posts })
}

#[derive(Debug, Default)]
pub struct UserDetailView {
    state: ViewState<UserDetail>,
    user_id: Option<UserId>,
    generation: Generation,
}

impl UserDetailView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<UserDetail> {
        &self.state
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Starts loading `id`; any load still in flight becomes stale.
    pub fn begin_load(&mut self, id: UserId) -> FetchTicket {
        debug!(user_id = %id, "loading user detail");
        self.user_id = Some(id);
        self.state = ViewState::Loading;
        self.generation.next()
    }

    /// Fails the view for a route segment that is not a user id. Pending
    /// loads are invalidated.
    pub fn reject_segment(&mut self, segment: &str) {
        warn!(segment, "route segment is not a user id");
        let _stale = self.generation.next();
        self.user_id = None;
        self.state = ViewState::Failed(GENERIC_DETAIL_ERROR.to_string());
    }

    /// Applies a fetch outcome. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<UserDetail, FetchError>) -> bool {
        if !self.generation.is_current(&ticket) {
            debug!(
                generation = ticket.generation(),
                "dropping stale user detail result"
            );
            return false;
        }

        self.state = match result {
            Ok(detail) => ViewState::Ready(detail),
            Err(err) => {
                warn!(
                    error = %err,
                    resource = %err.resource(),
                    status = ?err.status(),
                    "failed to load user detail"
                );
                ViewState::Failed(GENERIC_DETAIL_ERROR.to_string())
            }
        };
        true
    }

    /// Fetches profile and posts for `id` and settles them.
    pub async fn load<A: DirectoryApi>(&mut self, api: &A, id: UserId) {
        let ticket = self.begin_load(id);
        let result = fetch_detail(api, id).await;
        self.settle(ticket, result);
    }

    #[must_use]
    pub fn display(&self) -> DetailDisplay<'_> {
        match &self.state {
            ViewState::Loading => DetailDisplay::Loading,
            ViewState::Failed(message) => DetailDisplay::Error(message),
            ViewState::Ready(UserDetail {
                profile: None, ..
            }) => DetailDisplay::NotFound,
            ViewState::Ready(UserDetail {
                profile: Some(profile),
                posts,
            }) => DetailDisplay::Profile { profile, posts },
        }
    }
}
