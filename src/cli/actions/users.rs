use crate::cli::{actions::Connection, render};
use anyhow::{anyhow, Result};
use tracing::{debug, info};
use userdir_directory::{ListDisplay, UserListView};

#[derive(Debug)]
pub struct Args {
    pub connection: Connection,
    pub search: Option<String>,
}

/// Load the user list once, filter it, and print the cards.
/// # Errors
/// Returns the view's error message if the list could not be loaded.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.connection.client()?;
    debug!(api = %api.base_url(), "loading users");

    let mut view = UserListView::new();
    if let Some(term) = args.search {
        view.set_search(term);
    }
    view.load(&api).await;

    match view.display() {
        ListDisplay::Cards(cards) => {
            info!(shown = cards.len(), search = view.search(), "rendering users");
            print!("{}", render::cards(&cards));
            Ok(())
        }
        ListDisplay::Error(message) => Err(anyhow!("{message}")),
        ListDisplay::Placeholders(_) => Err(anyhow!("user list never settled")),
    }
}
