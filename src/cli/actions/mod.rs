pub mod user;
pub mod users;

mod run;

use crate::api::HttpDirectory;
use anyhow::Result;
use std::time::Duration;

/// Where and how to reach the directory API.
#[derive(Debug, Clone)]
pub struct Connection {
    pub api_url: String,
    pub timeout: Duration,
}

impl Connection {
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn client(&self) -> Result<HttpDirectory> {
        HttpDirectory::new(&self.api_url, self.timeout)
    }
}

#[derive(Debug)]
pub enum Action {
    Users(users::Args),
    User(user::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the view ends in its failed state.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}
