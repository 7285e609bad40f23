use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};
use userdir_directory::api::DEFAULT_BASE_URL;

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("userdir")
        .about("Browse a remote user directory and its posts")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Base URL of the directory REST API")
                .default_value(DEFAULT_BASE_URL)
                .env("USERDIR_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("USERDIR_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERDIR_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("users")
                .about("List users, optionally filtered by name or email")
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .help("Case-insensitive substring of the name or email"),
                ),
        )
        .subcommand(
            Command::new("user")
                .about("Show a user's profile and posts")
                .arg(
                    Arg::new("id")
                        .help("User id")
                        .required(true)
                        .allow_negative_numbers(true),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userdir");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Browse a remote user directory and its posts"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_users_defaults() {
        temp_env::with_vars(
            [
                ("USERDIR_API_URL", None::<&str>),
                ("USERDIR_TIMEOUT", None),
                ("USERDIR_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["userdir", "users"]);
                assert_eq!(
                    matches.get_one::<String>("api-url").map(String::as_str),
                    Some(DEFAULT_BASE_URL)
                );
                assert_eq!(matches.get_one::<u64>("timeout").copied(), Some(10));

                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, "users");
                assert_eq!(sub.get_one::<String>("search"), None);
            },
        );
    }

    #[test]
    fn test_user_with_global_args_after_subcommand() {
        let matches = new().get_matches_from(vec![
            "userdir",
            "user",
            "7",
            "--api-url",
            "http://localhost:3000",
            "--timeout",
            "3",
        ]);

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "user");
        assert_eq!(
            sub.get_one::<String>("id").map(String::as_str),
            Some("7")
        );
        assert_eq!(
            sub.get_one::<String>("api-url").map(String::as_str),
            Some("http://localhost:3000")
        );
        assert_eq!(sub.get_one::<u64>("timeout").copied(), Some(3));
    }

    #[test]
    fn test_user_accepts_negative_id() {
        let matches = new().get_matches_from(vec!["userdir", "user", "-1"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("id").map(String::as_str), Some("-1"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = new().try_get_matches_from(vec!["userdir", "users", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERDIR_API_URL", Some("http://directory.tld")),
                ("USERDIR_TIMEOUT", Some("30")),
                ("USERDIR_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userdir", "users", "-s", "ann"]);
                assert_eq!(
                    matches.get_one::<String>("api-url").map(String::as_str),
                    Some("http://directory.tld")
                );
                assert_eq!(matches.get_one::<u64>("timeout").copied(), Some(30));
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));

                let (_, sub) = matches.subcommand().unwrap();
                assert_eq!(
                    sub.get_one::<String>("search").map(String::as_str),
                    Some("ann")
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERDIR_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userdir", "users"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("USERDIR_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userdir".to_string(), "users".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
