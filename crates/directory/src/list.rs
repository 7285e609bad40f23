//! User list view model: one fetch per mount, client-side filtering.

use crate::{
    api::DirectoryApi,
    error::FetchError,
    paths,
    state::{FetchTicket, Generation, ViewState},
    types::UserSummary,
};
use tracing::{debug, warn};

/// Number of placeholder cards shown while the list loads.
pub const PLACEHOLDER_CARDS: usize = 10;

/// Users whose name or email contains `term`, ignoring case. An empty term
/// keeps every user. Order is preserved.
#[must_use]
pub fn filter_users<'a>(users: &'a [UserSummary], term: &str) -> Vec<&'a UserSummary> {
    if term.is_empty() {
        return users.iter().collect();
    }

    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Everything a card needs, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCard {
    pub name: String,
    pub email: String,
    pub address: String,
    pub company: String,
    pub href: String,
}

impl From<&UserSummary> for UserCard {
    fn from(user: &UserSummary) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address_line(),
            company: user.company.name.clone(),
            href: paths::user_detail(user.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListDisplay<'a> {
    Placeholders(usize),
    Error(&'a str),
    Cards(Vec<UserCard>),
}

#[derive(Debug, Default)]
pub struct UserListView {
    state: ViewState<Vec<UserSummary>>,
    search: String,
    generation: Generation,
}

impl UserListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<Vec<UserSummary>> {
        &self.state
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search term. Never triggers a fetch.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.state = ViewState::Loading;
        self.generation.next()
    }

    /// Applies a fetch outcome. Returns `false` when the ticket is stale and
    /// the outcome was dropped.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<UserSummary>, FetchError>,
    ) -> bool {
        if !self.generation.is_current(&ticket) {
            debug!(
                generation = ticket.generation(),
                "dropping stale user list result"
            );
            return false;
        }

        self.state = match result {
            Ok(users) => {
                debug!(count = users.len(), "user list loaded");
                ViewState::Ready(users)
            }
            Err(err) => {
                warn!(error = %err, "failed to load user list");
                ViewState::Failed(err.to_string())
            }
        };
        true
    }

    /// Fetches the full user list and settles it.
    pub async fn load<A: DirectoryApi>(&mut self, api: &A) {
        let ticket = self.begin_load();
        let result = api.list_users().await;
        self.settle(ticket, result);
    }

    /// Users matching the current search term; empty unless ready.
    #[must_use]
    pub fn filtered(&self) -> Vec<&UserSummary> {
        match &self.state {
            ViewState::Ready(users) => filter_users(users, &self.search),
            ViewState::Loading | ViewState::Failed(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn display(&self) -> ListDisplay<'_> {
        match &self.state {
            ViewState::Loading => ListDisplay::Placeholders(PLACEHOLDER_CARDS),
            ViewState::Failed(message) => ListDisplay::Error(message),
            ViewState::Ready(_) => {
                ListDisplay::Cards(self.filtered().into_iter().map(UserCard::from).collect())
            }
        }
    }
}
