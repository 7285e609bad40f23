use crate::cli::actions::{user, users, Action, Connection};
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

/// # Errors
/// Returns an error if no subcommand was given or a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("users", sub_m)) => Ok(Action::Users(users::Args {
            connection: connection(sub_m)?,
            search: sub_m.get_one::<String>("search").cloned(),
        })),
        Some(("user", sub_m)) => Ok(Action::User(user::Args {
            connection: connection(sub_m)?,
            id: sub_m
                .get_one::<String>("id")
                .cloned()
                .context("missing required argument: ID")?,
        })),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn connection(matches: &clap::ArgMatches) -> Result<Connection> {
    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .context("missing required argument: --api-url")?;
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(10);

    Ok(Connection {
        api_url,
        timeout: Duration::from_secs(timeout),
    })
}
