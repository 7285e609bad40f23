//! # userdir
//!
//! Terminal front end for the user directory. It drives the same list and
//! detail view models as the web app (`apps/web`) through a `reqwest` client,
//! then prints the settled view.
//!
//! - `userdir users [--search TERM]` lists users as cards, filtered by name or email.
//! - `userdir user ID` shows a profile followed by that user's posts.

pub mod api;
pub mod cli;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
