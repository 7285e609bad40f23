use crate::cli::actions::{user, users, Action};
use anyhow::Result;

/// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Users(args) => users::execute(args).await,
        Action::User(args) => user::execute(args).await,
    }
}
