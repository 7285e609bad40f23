//! Framework-independent core of the user directory: the data model returned
//! by the remote API, the filtering rule, and the list/detail view models
//! with their explicit `Loading | Failed | Ready` states.
//!
//! Front ends own an `impl DirectoryApi` and a view model, start a load with
//! `begin_load`, run the fetch on their executor, and hand the outcome back
//! through `settle`. Results belonging to an older load are discarded.

pub mod api;
pub mod detail;
mod error;
pub mod list;
pub mod paths;
mod state;
mod types;

pub use api::DirectoryApi;
pub use detail::{fetch_detail, DetailDisplay, UserDetailView, GENERIC_DETAIL_ERROR};
pub use error::{FetchError, Resource};
pub use list::{filter_users, ListDisplay, UserCard, UserListView, PLACEHOLDER_CARDS};
pub use state::{FetchTicket, Generation, ViewState};
pub use types::{Address, Company, Post, UserDetail, UserId, UserProfile, UserSummary};
