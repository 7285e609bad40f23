use crate::cli::{actions::Connection, render};
use anyhow::{anyhow, Result};
use tracing::debug;
use userdir_directory::{paths, DetailDisplay, UserDetailView};

#[derive(Debug)]
pub struct Args {
    pub connection: Connection,
    /// Raw id as typed, parsed the same way as the `/users/:id` route segment.
    pub id: String,
}

/// Load a profile together with its posts and print them.
/// # Errors
/// Returns the view's error message if either request failed.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.connection.client()?;
    debug!(api = %api.base_url(), id = %args.id, "loading user");

    let mut view = UserDetailView::new();
    match paths::parse_user_id(&args.id) {
        Some(id) => view.load(&api, id).await,
        None => view.reject_segment(&args.id),
    }

    match view.display() {
        DetailDisplay::Profile { profile, posts } => {
            print!("{}", render::profile(profile, posts));
            Ok(())
        }
        DetailDisplay::NotFound => {
            println!("{}", render::NOT_FOUND);
            Ok(())
        }
        DetailDisplay::Error(message) => Err(anyhow!("{message}")),
        DetailDisplay::Loading => Err(anyhow!("user detail never settled")),
    }
}
